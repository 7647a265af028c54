use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::rate_limit::RateLimitRepo,
    domain::entities::rate_limit::RateLimit,
};

fn row_to_rate_limit(row: sqlx::postgres::PgRow) -> RateLimit {
    RateLimit {
        key: row.get("key"),
        limit: row.get("limit"),
        window_sec: row.get("window_sec"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl RateLimitRepo for PostgresPersistence {
    async fn get_by_key(&self, key: &str) -> AppResult<Option<RateLimit>> {
        let row = sqlx::query(
            r#"
            SELECT key, "limit", window_sec, created_at, updated_at
            FROM rate_limits
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_rate_limit))
    }

    async fn upsert(&self, key: &str, limit: i32, window_sec: i32) -> AppResult<RateLimit> {
        let row = sqlx::query(
            r#"
            INSERT INTO rate_limits (key, "limit", window_sec)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE
            SET "limit" = EXCLUDED."limit",
                window_sec = EXCLUDED.window_sec,
                updated_at = CURRENT_TIMESTAMP
            RETURNING key, "limit", window_sec, created_at, updated_at
            "#,
        )
        .bind(key)
        .bind(limit)
        .bind(window_sec)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_rate_limit(row))
    }
}
