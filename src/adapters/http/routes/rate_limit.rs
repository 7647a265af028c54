use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, patch},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}", get(get_user_rate_limit))
        .route("/update/{user_id}", patch(update_user_rate_limit))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetUserRateLimitResponse {
    #[serde(rename = "user_id")]
    user_id: String,
    limit: i32,
    window_sec: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRateLimitQuery {
    limit: i32,
    window_sec: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateUserRateLimitResponse {
    #[serde(rename = "user_id")]
    user_id: String,
    limit: i32,
    window_sec: i32,
    status: &'static str,
}

/// GET /ratelimit/{user_id}
/// Falls back to the default limit when nothing is stored.
async fn get_user_rate_limit(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let rate_limit = app_state
        .rate_limit_use_cases
        .get_rate_limit(&user_id)
        .await?;

    Ok(Json(GetUserRateLimitResponse {
        user_id,
        limit: rate_limit.limit,
        window_sec: rate_limit.window_sec,
        created_at: rate_limit.created_at,
        updated_at: rate_limit.updated_at,
    }))
}

/// PATCH /ratelimit/update/{user_id}?limit=..&windowSec=..
async fn update_user_rate_limit(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<UpdateRateLimitQuery>,
) -> AppResult<impl IntoResponse> {
    let stored = app_state
        .rate_limit_use_cases
        .update_rate_limit(&user_id, query.limit, query.window_sec)
        .await?;

    Ok(Json(UpdateUserRateLimitResponse {
        user_id,
        limit: stored.limit,
        window_sec: stored.window_sec,
        status: "Rate limit settings updated successfully.",
    }))
}
