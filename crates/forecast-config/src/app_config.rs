//! Application configuration structures.

use crate::parse_duration;
use forecast_core::{ForecastError, ForecastResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Redis configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "forecast-service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Enable CORS.
    pub cors_enabled: bool,
    /// CORS allowed origins.
    pub cors_origins: Vec<String>,
    /// Serve Swagger UI and the OpenAPI document.
    pub swagger_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
            swagger_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Returns the server bind address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Redis configuration.
///
/// Durations are kept as strings and parsed on use, so a malformed value
/// surfaces as a configuration error wherever it is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Use Redis. When disabled an in-process cache is used instead.
    pub enabled: bool,
    /// Connection target, either `host:port[,option=value...]` or a `redis://` URL.
    pub connection_string: String,
    /// Prefix prepended to every cache key.
    pub instance_name: String,
    /// Connection pool size.
    pub pool_size: usize,
    /// Base time-to-live of a cached forecast.
    pub cache_duration: String,
    /// Upper bound (exclusive) of the random time added to `cache_duration`.
    pub jitter_duration: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            connection_string: "localhost:6379".to_string(),
            instance_name: "WeatherCache:".to_string(),
            pool_size: 10,
            cache_duration: "00:05:00".to_string(),
            jitter_duration: "00:01:00".to_string(),
        }
    }
}

impl RedisConfig {
    /// Parses the base cache duration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the value is malformed.
    pub fn cache_duration(&self) -> ForecastResult<Duration> {
        parse_duration(&self.cache_duration)
    }

    /// Parses the jitter duration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the value is malformed.
    pub fn jitter_duration(&self) -> ForecastResult<Duration> {
        parse_duration(&self.jitter_duration)
    }

    /// Checks both durations and that the base duration is positive.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first problem found.
    pub fn validate_expiration(&self) -> ForecastResult<()> {
        if self.cache_duration()?.is_zero() {
            return Err(ForecastError::configuration(
                "redis.cache_duration must be greater than zero",
            ));
        }
        self.jitter_duration()?;
        Ok(())
    }

    /// Builds a `redis://` URL from the connection string.
    ///
    /// Strings that already carry a `redis://` or `rediss://` scheme are
    /// returned unchanged. Otherwise the first comma-separated entry without
    /// `=` is the endpoint and the `user`, `password`, `ssl` and
    /// `defaultDatabase` options are honored; other options are ignored.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no endpoint is present.
    pub fn url(&self) -> ForecastResult<String> {
        let raw = self.connection_string.trim();
        if raw.starts_with("redis://") || raw.starts_with("rediss://") {
            return Ok(raw.to_string());
        }

        let mut endpoint = None;
        let mut user = None;
        let mut password = None;
        let mut ssl = false;
        let mut database = None;

        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((key, value)) => match key.trim().to_ascii_lowercase().as_str() {
                    "user" => user = Some(value.trim()),
                    "password" => password = Some(value.trim()),
                    "ssl" => ssl = value.trim().eq_ignore_ascii_case("true"),
                    "defaultdatabase" => database = Some(value.trim()),
                    _ => {}
                },
                None if endpoint.is_none() => endpoint = Some(part),
                None => {}
            }
        }

        let endpoint = endpoint.ok_or_else(|| {
            ForecastError::configuration(format!(
                "redis.connection_string '{}' has no endpoint",
                self.connection_string
            ))
        })?;

        let scheme = if ssl { "rediss" } else { "redis" };
        let credentials = match (user, password) {
            (Some(user), Some(password)) => format!("{user}:{password}@"),
            (None, Some(password)) => format!(":{password}@"),
            (Some(user), None) => format!("{user}@"),
            (None, None) => String::new(),
        };
        let database = database.map(|db| format!("/{db}")).unwrap_or_default();

        Ok(format!("{scheme}://{credentials}{endpoint}{database}"))
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Returns true when logs should be emitted as JSON.
    #[must_use]
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redis(connection_string: &str) -> RedisConfig {
        RedisConfig {
            connection_string: connection_string.to_string(),
            ..RedisConfig::default()
        }
    }

    #[test]
    fn test_default_redis_config() {
        let config = RedisConfig::default();
        assert_eq!(config.connection_string, "localhost:6379");
        assert_eq!(config.instance_name, "WeatherCache:");
        assert_eq!(config.cache_duration().unwrap(), Duration::from_secs(300));
        assert_eq!(config.jitter_duration().unwrap(), Duration::from_secs(60));
        assert!(config.validate_expiration().is_ok());
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(ServerConfig::default().addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_url_from_host_port() {
        assert_eq!(redis("localhost:6379").url().unwrap(), "redis://localhost:6379");
    }

    #[test]
    fn test_url_passthrough() {
        assert_eq!(
            redis("rediss://cache.internal:6380/2").url().unwrap(),
            "rediss://cache.internal:6380/2"
        );
    }

    #[test]
    fn test_url_with_options() {
        let config = redis("cache.internal:6380, password=s3cret, ssl=True, defaultDatabase=3, abortConnect=false");
        assert_eq!(config.url().unwrap(), "rediss://:s3cret@cache.internal:6380/3");

        let config = redis("cache:6379,user=app,password=pw");
        assert_eq!(config.url().unwrap(), "redis://app:pw@cache:6379");
    }

    #[test]
    fn test_url_without_endpoint() {
        let err = redis("password=only").url().unwrap_err();
        assert!(matches!(err, ForecastError::Configuration(_)));
    }

    #[test]
    fn test_zero_cache_duration_rejected() {
        let config = RedisConfig {
            cache_duration: "00:00:00".to_string(),
            ..RedisConfig::default()
        };
        assert!(matches!(
            config.validate_expiration(),
            Err(ForecastError::Configuration(_))
        ));
    }

    #[test]
    fn test_malformed_jitter_rejected() {
        let config = RedisConfig {
            jitter_duration: "a minute".to_string(),
            ..RedisConfig::default()
        };
        assert!(config.validate_expiration().is_err());
    }

    #[test]
    fn test_json_logs() {
        let mut config = ObservabilityConfig::default();
        assert!(!config.json_logs());
        config.log_format = "JSON".to_string();
        assert!(config.json_logs());
    }
}
