//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `INTAKE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use intake_readiness::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Pursue at {} points", config.scoring.pursue_threshold);
//! ```

mod error;
mod export;
mod logging;
mod scoring;
mod summary;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;
pub use scoring::ScoringConfig;
pub use summary::SummaryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Readiness thresholds
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Consultant summary rendering
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Document export
    #[serde(default)]
    pub export: ExportConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `INTAKE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INTAKE__SCORING__PURSUE_THRESHOLD=20` -> `scoring.pursue_threshold = 20`
    /// - `INTAKE__EXPORT__FORMAT=html` -> `export.format = html`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INTAKE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::SummaryFormat;
    use crate::ports::ExportFormat;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "INTAKE__SCORING__PURSUE_THRESHOLD",
        "INTAKE__SCORING__PENDING_THRESHOLD",
        "INTAKE__SUMMARY__FORMAT",
        "INTAKE__EXPORT__ENABLED",
        "INTAKE__EXPORT__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.scoring.pursue_threshold, 20);
        assert_eq!(config.scoring.pending_threshold, 12);
        assert_eq!(config.summary.format, SummaryFormat::Joined);
        assert!(!config.export.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INTAKE__SCORING__PURSUE_THRESHOLD", "18");
        env::set_var("INTAKE__SCORING__PENDING_THRESHOLD", "9");
        env::set_var("INTAKE__SUMMARY__FORMAT", "lines");
        env::set_var("INTAKE__EXPORT__ENABLED", "true");
        env::set_var("INTAKE__EXPORT__FORMAT", "html");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.pursue_threshold, 18);
        assert_eq!(config.scoring.pending_threshold, 9);
        assert_eq!(config.summary.format, SummaryFormat::Lines);
        assert!(config.export.enabled);
        assert_eq!(config.export.format, ExportFormat::Html);
    }

    #[test]
    fn test_load_accepts_format_extension() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INTAKE__EXPORT__FORMAT", "md");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().export.format, ExportFormat::Markdown);
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INTAKE__SCORING__PURSUE_THRESHOLD", "10");
        env::set_var("INTAKE__SCORING__PENDING_THRESHOLD", "15");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ThresholdOrder { .. })
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
