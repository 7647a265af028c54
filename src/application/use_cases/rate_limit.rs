use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument};

use crate::app_error::AppResult;
use crate::application::validators::require_positive;
use crate::domain::entities::rate_limit::RateLimit;

#[async_trait]
pub trait RateLimitRepo: Send + Sync {
    async fn get_by_key(&self, key: &str) -> AppResult<Option<RateLimit>>;

    /// Insert the row, or overwrite limit and window of an existing one.
    async fn upsert(&self, key: &str, limit: i32, window_sec: i32) -> AppResult<RateLimit>;
}

#[derive(Clone)]
pub struct RateLimitUseCases {
    repo: Arc<dyn RateLimitRepo>,
}

impl RateLimitUseCases {
    pub fn new(repo: Arc<dyn RateLimitRepo>) -> Self {
        Self { repo }
    }

    /// Stored limit for `user_id`, or the built-in default when there is none.
    #[instrument(skip(self))]
    pub async fn get_rate_limit(&self, user_id: &str) -> AppResult<RateLimit> {
        match self.repo.get_by_key(user_id).await? {
            Some(limit) => Ok(limit),
            None => {
                debug!("No stored rate limit, reporting default");
                Ok(RateLimit::default_for(user_id, Utc::now()))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn update_rate_limit(
        &self,
        user_id: &str,
        limit: i32,
        window_sec: i32,
    ) -> AppResult<RateLimit> {
        let limit = require_positive(limit, "limit")?;
        let window_sec = require_positive(window_sec, "windowSec")?;

        self.repo.upsert(user_id, limit, window_sec).await
    }
}
