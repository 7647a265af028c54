use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::api_key::ApiKeyRepo,
    domain::entities::api_key::ApiKey,
};

fn row_to_api_key(row: sqlx::postgres::PgRow) -> ApiKey {
    ApiKey {
        key: row.get("key"),
        user_id: row.get("user_id"),
        active: row.get("active"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl ApiKeyRepo for PostgresPersistence {
    async fn create(&self, key: &str, user_id: &str) -> AppResult<ApiKey> {
        // A duplicate key surfaces as a unique violation, i.e. AppError::Conflict.
        let row = sqlx::query(
            r#"
            INSERT INTO api_keys (key, user_id)
            VALUES ($1, $2)
            RETURNING key, user_id, active, created_at
            "#,
        )
        .bind(key)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_api_key(row))
    }

    async fn get_by_key(&self, key: &str) -> AppResult<Option<ApiKey>> {
        let row = sqlx::query(
            r#"
            SELECT key, user_id, active, created_at
            FROM api_keys
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_api_key))
    }
}
