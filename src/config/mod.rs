//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `VPAGEN_WORKER__<SECTION>__<KEY>` pattern

mod generation;
mod server;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use generation::{GenerationConfig, SessionConfig};

use crate::domain::DEFAULT_HANDLES;
pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation limits.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Session lifetime configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from the `config/` directory and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration from files in `dir` and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `{dir}/default.toml`
    /// 2. `{dir}/{VPAGEN_PROFILE}.toml` (if `VPAGEN_PROFILE` is set)
    /// 3. Environment variables with `VPAGEN_WORKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let profile =
            std::env::var("VPAGEN_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(&profile).to_string_lossy()).required(false))
            // VPAGEN_WORKER__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("VPAGEN_WORKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        self.generation.validate()?;
        self.session.validate()?;

        // The default selection is the whole catalog plus every custom handle
        let default_selection = DEFAULT_HANDLES.len() + self.session.max_custom_handles;
        if default_selection > self.generation.max_handles {
            return Err(ConfigError::Message(format!(
                "session.max_custom_handles ({}) plus the {} built-in handles exceeds generation.max_handles ({})",
                self.session.max_custom_handles,
                DEFAULT_HANDLES.len(),
                self.generation.max_handles
            )));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable Prometheus metrics endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: default_metrics_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generation.max_range_count, 100);
        assert_eq!(config.session.idle_timeout, 3600);
        assert_eq!(config.observability.log_format, "text");
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 9090\n\n[generation]\nmax_range_count = 50\n",
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.generation.max_range_count, 50);
        assert_eq!(config.generation.max_numbers, 10_000);
    }

    #[test]
    fn test_load_rejects_zero_limits() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[session]\nmax_sessions = 0\n",
        )
        .unwrap();

        assert!(AppConfig::load_from(dir.path()).is_err());
    }

    #[test]
    fn test_load_rejects_custom_handles_over_selection_limit() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[generation]\nmax_handles = 60\n\n[session]\nmax_custom_handles = 10\n",
        )
        .unwrap();

        assert!(AppConfig::load_from(dir.path()).is_err());

        std::fs::write(
            dir.path().join("default.toml"),
            "[generation]\nmax_handles = 60\n\n[session]\nmax_custom_handles = 7\n",
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.session.max_custom_handles, 7);
        assert_eq!(config.session.max_history, 100);
    }
}
