//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool, PoolConfig, Runtime};
use forecast_config::RedisConfig;
use forecast_core::{ForecastError, ForecastResult};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Creates a Redis connection pool from configuration.
///
/// Connections are opened lazily, so an unreachable server is reported by
/// the first cache operation rather than here.
///
/// # Errors
///
/// Returns a configuration error for a bad connection string and a cache
/// error if the pool cannot be built.
pub fn create_pool(config: &RedisConfig) -> ForecastResult<Arc<Pool>> {
    let mut redis_cfg = deadpool_redis::Config::from_url(config.url()?);
    redis_cfg.pool = Some(PoolConfig::new(config.pool_size.max(1)));

    let pool = redis_cfg
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| ForecastError::Cache(format!("Failed to create Redis pool: {}", e)))?;

    Ok(Arc::new(pool))
}

/// Redis-based cache service.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> ForecastResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                ForecastError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(ForecastError::Cache("Redis pool is not configured".to_string())),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    async fn get_raw(&self, key: &str) -> ForecastResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            ForecastError::Cache(format!("Failed to get key '{}': {}", key, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> ForecastResult<()> {
        let mut conn = self.get_conn().await?;
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);

        conn.pset_ex::<_, _, ()>(key, value, ttl_ms).await.map_err(|e| {
            ForecastError::Cache(format!("Failed to set key '{}': {}", key, e))
        })?;

        debug!("Cached key '{}' with TTL {}ms", key, ttl_ms);
        Ok(())
    }

    async fn ping(&self) -> ForecastResult<()> {
        let mut conn = self.get_conn().await?;
        let _pong: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| ForecastError::Cache(format!("Failed to ping Redis: {}", e)))?;
        Ok(())
    }
}
