//! Engine configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are loaded with the
//! `CHARLA_INSIGHT` prefix and nested values use double underscores as
//! separators. Everything has a default, so an empty environment yields
//! the shipped behavior.
//!
//! # Example
//!
//! ```no_run
//! use charla_insight::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use crate::domain::analysis::AnalysisConfig;
use serde::Deserialize;

/// Root engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Analysis pipeline thresholds.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `CHARLA_INSIGHT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CHARLA_INSIGHT__ANALYSIS__MESSAGE_LINE_LEN=30`
    ///   -> `analysis.message_line_len = 30`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHARLA_INSIGHT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any value is semantically invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let analysis = &self.analysis;
        if analysis.min_line_len == 0 {
            return Err(ValidationError::Zero { field: "min_line_len" });
        }
        if analysis.message_line_len == 0 {
            return Err(ValidationError::Zero {
                field: "message_line_len",
            });
        }
        if analysis.excerpt_len == 0 {
            return Err(ValidationError::Zero { field: "excerpt_len" });
        }
        if analysis.phone_min_digits == 0 {
            return Err(ValidationError::Zero {
                field: "phone_min_digits",
            });
        }
        if analysis.phone_min_digits > analysis.phone_max_digits {
            return Err(ValidationError::PhoneBoundsInverted {
                min: analysis.phone_min_digits,
                max: analysis.phone_max_digits,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CHARLA_INSIGHT__ANALYSIS__MESSAGE_LINE_LEN");
        env::remove_var("CHARLA_INSIGHT__ANALYSIS__MIN_LINE_LEN");
    }

    #[test]
    fn defaults_load_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = EngineConfig::load().expect("load failed");

        assert_eq!(config.analysis.min_line_len, 3);
        assert_eq!(config.analysis.message_line_len, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHARLA_INSIGHT__ANALYSIS__MESSAGE_LINE_LEN", "30");
        let result = EngineConfig::load();
        clear_env();

        let config = result.expect("load failed");
        assert_eq!(config.analysis.message_line_len, 30);
        assert_eq!(config.analysis.min_line_len, 3);
    }

    #[test]
    fn zero_threshold_fails_validation() {
        let mut config = EngineConfig::default();
        config.analysis.excerpt_len = 0;

        assert_eq!(
            config.validate(),
            Err(ValidationError::Zero { field: "excerpt_len" })
        );
    }

    #[test]
    fn inverted_phone_bounds_fail_validation() {
        let mut config = EngineConfig::default();
        config.analysis.phone_min_digits = 14;
        config.analysis.phone_max_digits = 13;

        assert!(matches!(
            config.validate(),
            Err(ValidationError::PhoneBoundsInverted { .. })
        ));
    }
}
