use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    domain::entities::geolocation::GeolocationRecord,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bulk", post(bulk_geolocation_query))
        .route("/{ip_address}", get(get_geolocation_data))
}

#[derive(Serialize)]
struct GeolocationDataResponse {
    country: String,
    city: Option<String>,
    latitude: f64,
    longitude: f64,
    #[serde(rename = "ISP")]
    isp: Option<String>,
}

#[derive(Serialize)]
struct GeolocationInfo {
    ip_address: String,
    country: String,
    city: Option<String>,
    latitude: f64,
    longitude: f64,
    #[serde(rename = "ISP")]
    isp: Option<String>,
}

impl From<GeolocationRecord> for GeolocationInfo {
    fn from(record: GeolocationRecord) -> Self {
        Self {
            ip_address: record.ip_address,
            country: record.country,
            city: record.city,
            latitude: record.latitude,
            longitude: record.longitude,
            isp: record.isp,
        }
    }
}

#[derive(Serialize)]
struct BulkGeolocationQueryResponse {
    geolocation_data: Vec<GeolocationInfo>,
}

/// GET /geolocation/{ip_address}
async fn get_geolocation_data(
    State(app_state): State<AppState>,
    Path(ip_address): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = app_state
        .geolocation_use_cases
        .lookup(&ip_address)
        .await?;

    Ok(Json(GeolocationDataResponse {
        country: record.country,
        city: record.city,
        latitude: record.latitude,
        longitude: record.longitude,
        isp: record.isp,
    }))
}

/// POST /geolocation/bulk
/// Body is a JSON array of address strings. Unknown addresses are left out
/// of the response.
async fn bulk_geolocation_query(
    State(app_state): State<AppState>,
    Json(ip_addresses): Json<Vec<String>>,
) -> AppResult<impl IntoResponse> {
    let records = app_state
        .geolocation_use_cases
        .bulk_lookup(&ip_addresses)
        .await?;

    Ok(Json(BulkGeolocationQueryResponse {
        geolocation_data: records.into_iter().map(GeolocationInfo::from).collect(),
    }))
}
