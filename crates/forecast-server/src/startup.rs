//! Server startup utilities.

use forecast_config::AppConfig;
use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("Forecast:  http://{}/weatherforecast/{{city}}", addr);
    info!("Health:    http://{}/health", addr);
    if config.server.swagger_enabled {
        info!("API Docs:  http://{}/swagger-ui", addr);
    }
    if config.redis.enabled {
        info!("Cache:     redis ({})", config.redis.connection_string);
    } else {
        info!("Cache:     in-memory");
    }
    info!(
        "Expiry:    {} + jitter below {}",
        config.redis.cache_duration, config.redis.jitter_duration
    );
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default());
    }

    #[test]
    fn test_print_startup_info_without_redis() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config.server.swagger_enabled = false;
        print_startup_info(&config);
    }
}
