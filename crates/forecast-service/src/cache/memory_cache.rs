//! In-process cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use forecast_core::ForecastResult;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// In-process cache with per-entry absolute expiration.
///
/// Used when Redis is disabled. Expiry is measured on the tokio clock, so
/// tests running with a paused clock can step past a TTL deterministically.
#[derive(Debug, Default)]
pub struct InMemoryCacheService {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryCacheService {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining time-to-live of a live entry.
    #[must_use]
    pub fn time_to_live(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .read()
            .get(key)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.expires_at - now)
    }

    /// Number of stored entries.
    ///
    /// Expired entries are dropped on the next write, or when their key is read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl CacheInterface for InMemoryCacheService {
    async fn get_raw(&self, key: &str) -> ForecastResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.entries.write();

        let value = match entries.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        };

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> ForecastResult<()> {
        let now = Instant::now();
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: now + ttl,
        };

        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        let swept = before - entries.len();
        entries.insert(key.to_string(), entry);
        drop(entries);

        if swept > 0 {
            debug!("Swept {} expired cache entries", swept);
        }

        debug!("Cached key '{}' with TTL {}ms", key, ttl.as_millis());
        Ok(())
    }

    async fn ping(&self) -> ForecastResult<()> {
        Ok(())
    }
}
