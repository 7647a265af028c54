pub mod api_key;
pub mod geolocation;
pub mod rate_limit;
