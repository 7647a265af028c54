use std::sync::Arc;

use crate::{
    application::use_cases::{
        api_key::ApiKeyUseCases, geolocation::GeolocationUseCases, health::HealthRepo,
        rate_limit::RateLimitUseCases,
    },
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub geolocation_use_cases: Arc<GeolocationUseCases>,
    pub api_key_use_cases: Arc<ApiKeyUseCases>,
    pub rate_limit_use_cases: Arc<RateLimitUseCases>,
    pub health_repo: Arc<dyn HealthRepo>,
}
