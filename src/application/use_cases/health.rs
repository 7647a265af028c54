use async_trait::async_trait;

use crate::app_error::AppResult;

#[async_trait]
pub trait HealthRepo: Send + Sync {
    /// Round-trips a trivial query through the store.
    async fn ping(&self) -> AppResult<()>;
}
