use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::geolocation::GeolocationRepo,
    domain::entities::geolocation::GeolocationRecord,
};

fn row_to_record(row: sqlx::postgres::PgRow) -> GeolocationRecord {
    GeolocationRecord {
        ip_address: row.get("ip_address"),
        country: row.get("country"),
        city: row.get("city"),
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
        isp: row.get("isp"),
    }
}

#[async_trait]
impl GeolocationRepo for PostgresPersistence {
    async fn get_by_ip(&self, ip_address: &str) -> AppResult<Option<GeolocationRecord>> {
        let row = sqlx::query(
            r#"
            SELECT ip_address, country, city, latitude, longitude, isp
            FROM geolocation_data
            WHERE ip_address = $1
            "#,
        )
        .bind(ip_address)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_record))
    }
}
