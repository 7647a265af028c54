use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/apikey/create", post(create_api_key))
        .route("/verify/{api_key}", get(verify_api_key))
}

#[derive(Deserialize)]
struct CreateApiKeyQuery {
    user_id: String,
}

#[derive(Serialize)]
struct CreateApiKeyResponse {
    api_key: String,
    creation_date: DateTime<Utc>,
    status: &'static str,
}

#[derive(Serialize)]
struct VerifyApiKeyResponse {
    #[serde(rename = "isValid")]
    is_valid: bool,
    message: &'static str,
}

/// POST /auth/apikey/create?user_id=...
/// The raw key is returned here and nowhere else.
async fn create_api_key(
    State(app_state): State<AppState>,
    Query(query): Query<CreateApiKeyQuery>,
) -> AppResult<impl IntoResponse> {
    let created = app_state
        .api_key_use_cases
        .create_api_key(&query.user_id)
        .await?;

    Ok(Json(CreateApiKeyResponse {
        api_key: created.key,
        creation_date: created.created_at,
        status: "Success",
    }))
}

/// GET /auth/verify/{api_key}
async fn verify_api_key(
    State(app_state): State<AppState>,
    Path(api_key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let status = app_state.api_key_use_cases.verify_api_key(&api_key).await?;

    Ok(Json(VerifyApiKeyResponse {
        is_valid: status.is_valid(),
        message: status.message(),
    }))
}
