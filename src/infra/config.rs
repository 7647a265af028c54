use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

use super::InfraError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = InfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(InfraError::ConfigInvalid { var: "LOG_FORMAT" }),
        }
    }
}

pub struct AppConfig {
    pub database_url: SecretString,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// How many freshly generated keys to try before giving up on a collision streak.
    pub api_key_max_attempts: u32,
    /// Upper bound on the number of addresses in one bulk request.
    pub bulk_max_ips: usize,
    /// Lookups in flight at once while serving a bulk request.
    pub bulk_lookup_concurrency: usize,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let database_url: SecretString = SecretString::new(
            std::env::var("DATABASE_URL")
                .map_err(|_| InfraError::ConfigMissing {
                    var: "DATABASE_URL",
                })?
                .into(),
        );

        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 8000)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|_| InfraError::ConfigInvalid { var: "CORS_ORIGIN" })?;
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let db_acquire_timeout_secs: u64 = get_env_default("DB_ACQUIRE_TIMEOUT_SECS", 5);
        let api_key_max_attempts: u32 = get_env_default("API_KEY_MAX_ATTEMPTS", 5);
        let bulk_max_ips: usize = get_env_default("BULK_MAX_IPS", 1000);
        let bulk_lookup_concurrency: usize = get_env_default("BULK_LOOKUP_CONCURRENCY", 8);
        let log_format: LogFormat =
            get_env_default("LOG_FORMAT", String::from("pretty")).parse()?;

        Ok(Self {
            database_url,
            bind_addr,
            cors_origin,
            db_max_connections,
            db_acquire_timeout_secs,
            api_key_max_attempts,
            bulk_max_ips,
            bulk_lookup_concurrency,
            log_format,
        })
    }
}
