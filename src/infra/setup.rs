use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{http::app_state::AppState, persistence::PostgresPersistence},
    infra::config::{AppConfig, LogFormat},
    use_cases::{
        api_key::{ApiKeyRepo, ApiKeyUseCases},
        geolocation::{GeolocationRepo, GeolocationUseCases},
        health::HealthRepo,
        rate_limit::{RateLimitRepo, RateLimitUseCases},
    },
};

/// Wires the use cases to the shared Postgres handle. The caller keeps its
/// own clone of `postgres` so the pool can be closed after shutdown.
pub fn init_app_state(config: AppConfig, postgres: Arc<PostgresPersistence>) -> AppState {
    let geolocation_use_cases = GeolocationUseCases::new(
        postgres.clone() as Arc<dyn GeolocationRepo>,
        config.bulk_max_ips,
        config.bulk_lookup_concurrency,
    );

    let api_key_use_cases = ApiKeyUseCases::new(
        postgres.clone() as Arc<dyn ApiKeyRepo>,
        config.api_key_max_attempts,
    );

    let rate_limit_use_cases = RateLimitUseCases::new(postgres.clone() as Arc<dyn RateLimitRepo>);

    AppState {
        config: Arc::new(config),
        geolocation_use_cases: Arc::new(geolocation_use_cases),
        api_key_use_cases: Arc::new(api_key_use_cases),
        rate_limit_use_cases: Arc::new(rate_limit_use_cases),
        health_repo: postgres as Arc<dyn HealthRepo>,
    }
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "geolocate_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(false) // don't show target (module path)
                    .with_level(true)
                    .pretty(),
            )
            .try_init()
            .ok(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
            .ok(),
    };
}
