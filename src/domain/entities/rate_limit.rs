use chrono::{DateTime, Utc};

/// Requests allowed per window when nothing is stored for an identifier.
pub const DEFAULT_LIMIT: i32 = 100;
/// Window length in seconds when nothing is stored for an identifier.
pub const DEFAULT_WINDOW_SEC: i32 = 3600;

#[derive(Debug, Clone, PartialEq)]
pub struct RateLimit {
    pub key: String,
    pub limit: i32,
    pub window_sec: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RateLimit {
    /// The fallback limit reported for identifiers without a stored row.
    /// Never persisted.
    pub fn default_for(key: &str, now: DateTime<Utc>) -> Self {
        Self {
            key: key.to_string(),
            limit: DEFAULT_LIMIT,
            window_sec: DEFAULT_WINDOW_SEC,
            created_at: now,
            updated_at: now,
        }
    }
}
