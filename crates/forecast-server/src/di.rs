//! Dependency injection module using Shaku.

use forecast_config::RedisConfig;
use forecast_core::{ForecastResult, SystemClock, ThreadRandomSource};
use forecast_service::{
    create_pool, CacheInterface, ForecastServiceImpl,
    ForecastServiceImplParameters, InMemoryCacheService, RedisCacheService,
    RedisCacheServiceParameters,
};
use shaku::module;
use std::sync::Arc;
use tracing::info;

module! {
    pub ForecastModule {
        components = [
            RedisCacheService,
            ThreadRandomSource,
            SystemClock,
            ForecastServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the forecast module.
///
/// With Redis enabled the cache is a pooled Redis client; otherwise an
/// in-process cache takes its place.
///
/// # Errors
///
/// Returns a configuration error for a bad connection string and a cache
/// error if the pool cannot be built.
pub fn build_forecast_module(redis_config: &RedisConfig) -> ForecastResult<Arc<ForecastModule>> {
    let mut builder = ForecastModule::builder().with_component_parameters::<ForecastServiceImpl>(
        ForecastServiceImplParameters {
            redis_config: redis_config.clone(),
        },
    );

    if redis_config.enabled {
        let pool = create_pool(redis_config)?;
        info!(
            pool_size = redis_config.pool_size,
            instance_name = %redis_config.instance_name,
            "Using Redis cache"
        );
        builder = builder
            .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
                pool: Some(pool),
            });
    } else {
        info!("Redis disabled, using in-memory cache");
        builder = builder
            .with_component_override::<dyn CacheInterface>(Box::new(InMemoryCacheService::new()));
    }

    Ok(Arc::new(builder.build()))
}
