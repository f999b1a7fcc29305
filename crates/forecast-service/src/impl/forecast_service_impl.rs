//! Cache-aside forecast service.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::WeatherForecastResponse;
use crate::forecast_service::ForecastService;
use crate::generator::{generate_forecast, jittered_ttl};
use async_trait::async_trait;
use forecast_config::RedisConfig;
use forecast_core::{Clock, ForecastError, ForecastResult, RandomSource, WeatherForecast};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Forecast service backed by a cache.
///
/// Concurrent misses for the same city each generate and write their own
/// forecast; the last write wins.
#[derive(Component)]
#[shaku(interface = ForecastService)]
pub struct ForecastServiceImpl {
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(inject)]
    random: Arc<dyn RandomSource>,
    #[shaku(inject)]
    clock: Arc<dyn Clock>,
    /// Key prefix and expiration settings.
    redis_config: RedisConfig,
}

impl ForecastServiceImpl {
    /// Creates a new forecast service.
    pub fn new(
        cache: Arc<dyn CacheInterface>,
        random: Arc<dyn RandomSource>,
        clock: Arc<dyn Clock>,
        redis_config: RedisConfig,
    ) -> Self {
        Self {
            cache,
            random,
            clock,
            redis_config,
        }
    }

    /// Base duration plus jitter, read from configuration on every call.
    fn expiration(&self) -> ForecastResult<Duration> {
        let base = self.redis_config.cache_duration()?;
        let jitter = self.redis_config.jitter_duration()?;
        let ttl = jittered_ttl(base, jitter, self.random.as_ref());

        if ttl.is_zero() {
            return Err(ForecastError::configuration(
                "cache expiration must be greater than zero",
            ));
        }
        Ok(ttl)
    }
}

#[async_trait]
impl ForecastService for ForecastServiceImpl {
    async fn get_forecast(&self, city: &str) -> ForecastResult<Vec<WeatherForecastResponse>> {
        if city.is_empty() {
            return Err(ForecastError::validation("city must not be empty"));
        }

        let cache_key = cache_keys::forecast(&self.redis_config.instance_name, city);

        if let Some(cached) = self.cache.get::<Vec<WeatherForecast>>(&cache_key).await? {
            debug!("Cache hit for forecast: {}", city);
            return Ok(cached.iter().map(WeatherForecastResponse::from).collect());
        }

        let forecast = generate_forecast(self.random.as_ref(), self.clock.today());
        let ttl = self.expiration()?;

        self.cache.set(&cache_key, &forecast, ttl).await?;

        info!(city = %city, ttl_secs = ttl.as_secs(), "Forecast generated and cached");
        Ok(forecast.iter().map(WeatherForecastResponse::from).collect())
    }

    async fn check_cache(&self) -> ForecastResult<()> {
        self.cache.ping().await
    }
}

impl std::fmt::Debug for ForecastServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastServiceImpl")
            .field("instance_name", &self.redis_config.instance_name)
            .finish_non_exhaustive()
    }
}
