pub mod auth;
pub mod geolocation;
pub mod health;
pub mod rate_limit;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/geolocation", geolocation::router())
        .nest("/auth", auth::router())
        .nest("/ratelimit", rate_limit::router())
        .merge(health::router())
}
