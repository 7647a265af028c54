pub mod api_key;
pub mod geolocation;
pub mod health;
pub mod rate_limit;
