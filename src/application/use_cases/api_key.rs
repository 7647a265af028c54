use std::sync::Arc;

use async_trait::async_trait;
use rand::RngCore;
use tracing::{instrument, warn};

use crate::app_error::{AppError, AppResult};
use crate::application::validators::require_identifier;
use crate::domain::entities::api_key::{ApiKey, ApiKeyStatus};

// ============================================================================
// Repository Trait
// ============================================================================

#[async_trait]
pub trait ApiKeyRepo: Send + Sync {
    /// Persists a new key. Must fail with `AppError::Conflict` when the key
    /// already exists.
    async fn create(&self, key: &str, user_id: &str) -> AppResult<ApiKey>;

    async fn get_by_key(&self, key: &str) -> AppResult<Option<ApiKey>>;
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct ApiKeyUseCases {
    repo: Arc<dyn ApiKeyRepo>,
    max_attempts: u32,
}

impl ApiKeyUseCases {
    pub fn new(repo: Arc<dyn ApiKeyRepo>, max_attempts: u32) -> Self {
        Self {
            repo,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Issue a fresh key for `user_id`.
    ///
    /// Only a uniqueness conflict triggers a retry with a newly generated
    /// key; any other store failure is returned as-is.
    #[instrument(skip(self))]
    pub async fn create_api_key(&self, user_id: &str) -> AppResult<ApiKey> {
        let user_id = require_identifier(user_id, "user_id")?;

        for attempt in 1..=self.max_attempts {
            let raw_key = generate_api_key();
            match self.repo.create(&raw_key, user_id).await {
                Ok(created) => return Ok(created),
                Err(AppError::Conflict) => {
                    warn!(attempt, "Generated API key collided with an existing one, retrying");
                }
                Err(err) => return Err(err),
            }
        }

        Err(AppError::Internal(format!(
            "no unique API key after {} attempts",
            self.max_attempts
        )))
    }

    #[instrument(skip_all)]
    pub async fn verify_api_key(&self, raw_key: &str) -> AppResult<ApiKeyStatus> {
        let record = self.repo.get_by_key(raw_key).await?;
        Ok(ApiKeyStatus::of(record.as_ref()))
    }
}

// ============================================================================
// Key Generation
// ============================================================================

/// 128 random bits, hex-encoded (32 lowercase chars).
fn generate_api_key() -> String {
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
