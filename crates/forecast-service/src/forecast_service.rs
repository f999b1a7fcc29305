//! Forecast service trait definition.

use crate::dto::WeatherForecastResponse;
use async_trait::async_trait;
use forecast_core::{ForecastResult, Interface};

/// Forecast service trait.
#[async_trait]
pub trait ForecastService: Interface + Send + Sync {
    /// Returns the forecast for a city, from cache when present.
    ///
    /// On a miss a fresh forecast is generated and written back with a
    /// jittered expiration. Cache, serialization and configuration errors
    /// are returned unchanged.
    async fn get_forecast(&self, city: &str) -> ForecastResult<Vec<WeatherForecastResponse>>;

    /// Checks that the cache backend is reachable.
    async fn check_cache(&self) -> ForecastResult<()>;
}
