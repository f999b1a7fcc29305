//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use forecast_core::{ForecastResult, Interface};
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// Values are JSON strings so the trait stays dyn-compatible. Entries are
/// written whole with an absolute expiration and never updated in place.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> ForecastResult<Option<String>>;

    /// Set a raw JSON value in the cache, expiring `ttl` from now.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> ForecastResult<()>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> ForecastResult<()>;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    ///
    /// An empty stored string counts as a miss.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> ForecastResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) if !json.is_empty() => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> ForecastResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
