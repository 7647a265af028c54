//! In-memory implementations of the repository traits.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::{
        api_key::ApiKeyRepo, geolocation::GeolocationRepo, health::HealthRepo,
        rate_limit::RateLimitRepo,
    },
    domain::entities::{api_key::ApiKey, geolocation::GeolocationRecord, rate_limit::RateLimit},
};

fn simulated_failure() -> AppError {
    AppError::Database("simulated failure".into())
}

// ============================================================================
// Geolocation
// ============================================================================

#[derive(Default)]
pub struct InMemoryGeolocationRepo {
    pub records: Mutex<HashMap<String, GeolocationRecord>>,
    failing_ips: Mutex<HashSet<String>>,
    delays: Mutex<HashMap<String, Duration>>,
    lookups: AtomicUsize,
}

impl InMemoryGeolocationRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial rows for testing.
    pub fn with_records(records: Vec<GeolocationRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.ip_address.clone(), r))
            .collect();
        Self {
            records: Mutex::new(map),
            ..Self::default()
        }
    }

    /// Make lookups of `ip_address` fail with a database error.
    pub fn fail_on(&self, ip_address: &str) {
        self.failing_ips
            .lock()
            .unwrap()
            .insert(ip_address.to_string());
    }

    /// Make lookups of `ip_address` sleep before answering.
    pub fn delay_on(&self, ip_address: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert(ip_address.to_string(), delay);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeolocationRepo for InMemoryGeolocationRepo {
    async fn get_by_ip(&self, ip_address: &str) -> AppResult<Option<GeolocationRecord>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let delay = self.delays.lock().unwrap().get(ip_address).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_ips.lock().unwrap().contains(ip_address) {
            return Err(simulated_failure());
        }
        Ok(self.records.lock().unwrap().get(ip_address).cloned())
    }
}

// ============================================================================
// API keys
// ============================================================================

#[derive(Default)]
pub struct InMemoryApiKeyRepo {
    pub keys: Mutex<HashMap<String, ApiKey>>,
    create_errors: Mutex<VecDeque<AppError>>,
    create_calls: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryApiKeyRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: Vec<ApiKey>) -> Self {
        let map = keys.into_iter().map(|k| (k.key.clone(), k)).collect();
        Self {
            keys: Mutex::new(map),
            ..Self::default()
        }
    }

    /// Queue an error for the next `create` call. Queued errors are consumed
    /// in order, one per call, before normal behavior resumes.
    pub fn push_create_error(&self, err: AppError) {
        self.create_errors.lock().unwrap().push_back(err);
    }

    /// Make every call fail with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Get all stored keys (for test assertions).
    pub fn get_all(&self) -> Vec<ApiKey> {
        self.keys.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl ApiKeyRepo for InMemoryApiKeyRepo {
    async fn create(&self, key: &str, user_id: &str) -> AppResult<ApiKey> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        if let Some(err) = self.create_errors.lock().unwrap().pop_front() {
            return Err(err);
        }

        let mut keys = self.keys.lock().unwrap();
        if keys.contains_key(key) {
            return Err(AppError::Conflict);
        }

        let api_key = ApiKey {
            key: key.to_string(),
            user_id: user_id.to_string(),
            active: true,
            created_at: Utc::now(),
        };
        keys.insert(api_key.key.clone(), api_key.clone());
        Ok(api_key)
    }

    async fn get_by_key(&self, key: &str) -> AppResult<Option<ApiKey>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        Ok(self.keys.lock().unwrap().get(key).cloned())
    }
}

// ============================================================================
// Rate limits
// ============================================================================

#[derive(Default)]
pub struct InMemoryRateLimitRepo {
    pub limits: Mutex<HashMap<String, RateLimit>>,
    failing: AtomicBool,
}

impl InMemoryRateLimitRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Vec<RateLimit>) -> Self {
        let map = limits.into_iter().map(|l| (l.key.clone(), l)).collect();
        Self {
            limits: Mutex::new(map),
            ..Self::default()
        }
    }

    /// Make every call fail with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Get all stored limits (for test assertions).
    pub fn get_all(&self) -> Vec<RateLimit> {
        self.limits.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl RateLimitRepo for InMemoryRateLimitRepo {
    async fn get_by_key(&self, key: &str) -> AppResult<Option<RateLimit>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        Ok(self.limits.lock().unwrap().get(key).cloned())
    }

    async fn upsert(&self, key: &str, limit: i32, window_sec: i32) -> AppResult<RateLimit> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }

        let now = Utc::now();
        let mut limits = self.limits.lock().unwrap();
        let entry = limits.entry(key.to_string()).or_insert_with(|| RateLimit {
            key: key.to_string(),
            limit,
            window_sec,
            created_at: now,
            updated_at: now,
        });
        entry.limit = limit;
        entry.window_sec = window_sec;
        entry.updated_at = now;

        Ok(entry.clone())
    }
}

// ============================================================================
// Health
// ============================================================================

pub struct InMemoryHealthRepo {
    healthy: AtomicBool,
}

impl InMemoryHealthRepo {
    pub fn new(healthy: bool) -> Self {
        Self {
            healthy: AtomicBool::new(healthy),
        }
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

impl Default for InMemoryHealthRepo {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl HealthRepo for InMemoryHealthRepo {
    async fn ping(&self) -> AppResult<()> {
        if self.healthy.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(simulated_failure())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_api_key;

    #[tokio::test]
    async fn api_key_repo_rejects_duplicates() {
        let repo = InMemoryApiKeyRepo::with_keys(vec![create_test_api_key("dup", |_| {})]);

        let err = repo.create("dup", "user-2").await.unwrap_err();

        assert!(matches!(err, AppError::Conflict));
        assert_eq!(repo.get_all().len(), 1);
    }

    #[tokio::test]
    async fn rate_limit_upsert_keeps_created_at() {
        let repo = InMemoryRateLimitRepo::new();

        let first = repo.upsert("user-1", 1, 1).await.unwrap();
        let second = repo.upsert("user-1", 2, 2).await.unwrap();

        assert_eq!(first.created_at, second.created_at);
        assert_eq!(second.limit, 2);
        assert_eq!(second.window_sec, 2);
    }
}
