use std::sync::Arc;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use tracing::{debug, instrument};

use crate::app_error::{AppError, AppResult};
use crate::domain::entities::geolocation::GeolocationRecord;

#[async_trait]
pub trait GeolocationRepo: Send + Sync {
    async fn get_by_ip(&self, ip_address: &str) -> AppResult<Option<GeolocationRecord>>;
}

#[derive(Clone)]
pub struct GeolocationUseCases {
    repo: Arc<dyn GeolocationRepo>,
    bulk_max_ips: usize,
    bulk_concurrency: usize,
}

impl GeolocationUseCases {
    pub fn new(repo: Arc<dyn GeolocationRepo>, bulk_max_ips: usize, bulk_concurrency: usize) -> Self {
        Self {
            repo,
            bulk_max_ips,
            bulk_concurrency: bulk_concurrency.max(1),
        }
    }

    #[instrument(skip(self))]
    pub async fn lookup(&self, ip_address: &str) -> AppResult<GeolocationRecord> {
        self.repo.get_by_ip(ip_address).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Geolocation data not found for IP address: {ip_address}"
            ))
        })
    }

    /// Looks up every address, dropping misses. Hits keep the order of the
    /// input and echo the address exactly as the caller sent it.
    #[instrument(skip(self, ip_addresses), fields(requested = ip_addresses.len()))]
    pub async fn bulk_lookup(&self, ip_addresses: &[String]) -> AppResult<Vec<GeolocationRecord>> {
        if ip_addresses.is_empty() {
            return Err(AppError::InvalidInput("No IP addresses provided.".into()));
        }
        if ip_addresses.len() > self.bulk_max_ips {
            return Err(AppError::InvalidInput(format!(
                "At most {} IP addresses can be queried at once.",
                self.bulk_max_ips
            )));
        }

        // `buffered` (not `buffer_unordered`) yields results by input index.
        let repo = self.repo.clone();
        let results: Vec<Option<GeolocationRecord>> = stream::iter(ip_addresses.to_vec())
            .map(move |ip| {
                let repo = repo.clone();
                async move {
                    let found = repo.get_by_ip(&ip).await?;
                    Ok::<_, AppError>(found.map(|record| GeolocationRecord {
                        ip_address: ip,
                        ..record
                    }))
                }
            })
            .buffered(self.bulk_concurrency)
            .try_collect()
            .await?;

        let hits: Vec<GeolocationRecord> = results.into_iter().flatten().collect();
        debug!(found = hits.len(), "Bulk geolocation lookup finished");
        Ok(hits)
    }
}
