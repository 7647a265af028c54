use crate::{adapters::persistence::PostgresPersistence, infra::db::init_db};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;

pub use error::InfraError;

pub async fn postgres_persistence(
    config: &config::AppConfig,
) -> Result<PostgresPersistence, InfraError> {
    let pool = init_db(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout_secs,
    )
    .await?;
    let persistence = PostgresPersistence::new(pool);
    Ok(persistence)
}
