use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ApiKey {
    pub key: String,
    pub user_id: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Outcome of looking a token up in the key store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyStatus {
    Missing,
    Inactive,
    Active,
}

impl ApiKeyStatus {
    pub fn of(key: Option<&ApiKey>) -> Self {
        match key {
            None => ApiKeyStatus::Missing,
            Some(k) if !k.active => ApiKeyStatus::Inactive,
            Some(_) => ApiKeyStatus::Active,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ApiKeyStatus::Active)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiKeyStatus::Missing => "API key does not exist.",
            ApiKeyStatus::Inactive => "API key is inactive.",
            ApiKeyStatus::Active => "API key is valid and active.",
        }
    }
}
