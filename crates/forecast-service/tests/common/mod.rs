//! Common test infrastructure for Redis integration tests.

use deadpool_redis::{redis::AsyncCommands, Pool};
use forecast_config::RedisConfig;
use forecast_service::create_pool;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::{Redis, REDIS_PORT};

/// Test Redis container wrapper.
///
/// Keeps the container alive for as long as the wrapper lives.
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    config: RedisConfig,
    pool: Arc<Pool>,
}

impl TestRedis {
    /// Starts a fresh Redis container and builds a pool against it.
    pub async fn new() -> Self {
        let container = Redis::default()
            .start()
            .await
            .expect("Failed to start Redis container");

        let host = container
            .get_host()
            .await
            .expect("Failed to get Redis host");
        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get Redis port");

        let config = RedisConfig {
            connection_string: format!("{host}:{port}"),
            ..RedisConfig::default()
        };
        let pool = create_pool(&config).expect("Failed to create Redis pool");

        Self {
            _container: container,
            config,
            pool,
        }
    }

    /// Redis configuration pointing at the container.
    pub fn config(&self) -> RedisConfig {
        self.config.clone()
    }

    /// Returns the connection pool.
    pub fn pool(&self) -> Arc<Pool> {
        Arc::clone(&self.pool)
    }

    /// Remaining time-to-live of `key` in milliseconds, as reported by `PTTL`.
    pub async fn pttl(&self, key: &str) -> i64 {
        let mut conn = self.pool.get().await.expect("Failed to get connection");
        conn.pttl(key).await.expect("PTTL failed")
    }

    /// Raw string stored under `key`.
    pub async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.pool.get().await.expect("Failed to get connection");
        conn.get(key).await.expect("GET failed")
    }
}
