//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use forecast_core::ForecastError;
use std::path::PathBuf;
use tracing::{debug, info};

/// Prefix of environment variables that override file configuration.
pub const ENV_PREFIX: &str = "FORECAST";

/// Environment used when `FORECAST_ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Loads configuration from layered sources.
///
/// Sources are applied in order, later ones overriding earlier ones:
/// 1. `{config_dir}/default.toml`
/// 2. `{config_dir}/{environment}.toml`
/// 3. `{config_dir}/local.toml`
/// 4. Environment variables with `FORECAST__` prefix, `__` separated
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a loader for `config_dir`.
    ///
    /// Reads a `.env` file if present, then takes the environment name from
    /// `FORECAST_ENVIRONMENT`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(format!("{ENV_PREFIX}_ENVIRONMENT"))
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Self {
            config_dir: config_dir.into(),
            environment,
        }
    }

    /// Creates a loader for the default location (`./config`).
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Overrides the environment name.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Returns the environment whose overrides are applied.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a source cannot be read or the
    /// resulting configuration is invalid.
    pub fn load(&self) -> Result<AppConfig, ForecastError> {
        info!("Loading configuration for environment: {}", self.environment);

        let mut builder = Config::builder();

        for name in ["default", self.environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path.as_path()).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_forecast_error)?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_forecast_error)?;
        app_config.app.environment.clone_from(&self.environment);

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Validates the configuration.
fn validate_config(config: &AppConfig) -> Result<(), ForecastError> {
    if config.server.port == 0 {
        return Err(ForecastError::configuration("server.port must not be 0"));
    }

    if config.redis.enabled {
        config.redis.url()?;
    }

    config.redis.validate_expiration()
}

fn config_error_to_forecast_error(err: ConfigError) -> ForecastError {
    ForecastError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::fs;
    use std::path::Path;
    use std::time::Duration;

    /// Serializes tests that read or write process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets an environment variable for the lifetime of the guard.
    struct EnvVar(&'static str);

    impl EnvVar {
        fn set(name: &'static str, value: &str) -> Self {
            std::env::set_var(name, value);
            Self(name)
        }
    }

    impl Drop for EnvVar {
        fn drop(&mut self) {
            std::env::remove_var(self.0);
        }
    }

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_loads_default_file() {
        let _lock = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            r#"
            [server]
            port = 9000

            [redis]
            connection_string = "cache:6379"
            cache_duration = "00:10:00"
            jitter_duration = "00:00:30"
            "#,
        );

        let config = ConfigLoader::new(dir.path()).load().unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.redis.connection_string, "cache:6379");
        assert_eq!(config.redis.instance_name, "WeatherCache:");
        assert_eq!(config.redis.cache_duration().unwrap(), Duration::from_secs(600));
        assert_eq!(config.redis.jitter_duration().unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let _lock = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();

        let config = ConfigLoader::new(dir.path().join("absent")).load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.redis.cache_duration, "00:05:00");
    }

    #[test]
    fn test_malformed_duration_fails_fast() {
        let _lock = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[redis]\ncache_duration = \"five minutes\"\n",
        );

        let result = ConfigLoader::new(dir.path()).load();

        assert!(matches!(result, Err(ForecastError::Configuration(_))));
    }

    #[test]
    fn test_env_var_overrides_files() {
        let _lock = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[redis]\ncache_duration = \"00:05:00\"\n");
        write(dir.path(), "local.toml", "[redis]\ncache_duration = \"00:07:00\"\n");
        let _var = EnvVar::set("FORECAST__REDIS__CACHE_DURATION", "00:10:00");

        let config = ConfigLoader::new(dir.path()).load().unwrap();

        assert_eq!(config.redis.cache_duration, "00:10:00");
        assert_eq!(config.redis.cache_duration().unwrap(), Duration::from_secs(600));
    }

    #[test]
    fn test_malformed_env_override_fails_fast() {
        let _lock = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        let _var = EnvVar::set("FORECAST__REDIS__JITTER_DURATION", "a while");

        let result = ConfigLoader::new(dir.path()).load();

        assert!(matches!(result, Err(ForecastError::Configuration(_))));
    }

    #[test]
    fn test_environment_file_layers_over_default() {
        let _lock = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[server]\nport = 9000\nswagger_enabled = true\n",
        );
        write(
            dir.path(),
            "production.toml",
            "[server]\nswagger_enabled = false\n\n[observability]\nlog_format = \"json\"\n",
        );
        let _var = EnvVar::set("FORECAST_ENVIRONMENT", "production");

        let loader = ConfigLoader::new(dir.path());
        let config = loader.load().unwrap();

        assert_eq!(loader.environment(), "production");
        assert_eq!(config.app.environment, "production");
        assert_eq!(config.server.port, 9000);
        assert!(!config.server.swagger_enabled);
        assert!(config.observability.json_logs());
    }

    #[test]
    fn test_other_environment_file_ignored() {
        let _lock = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "production.toml", "[server]\nswagger_enabled = false\n");

        let loader = ConfigLoader::new(dir.path()).with_environment("staging");
        let config = loader.load().unwrap();

        assert_eq!(config.app.environment, "staging");
        assert!(config.server.swagger_enabled);
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let rendered = toml::to_string(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.redis.cache_duration, "00:05:00");
        assert_eq!(parsed.server.port, 8080);
    }
}
