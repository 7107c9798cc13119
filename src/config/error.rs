//! Configuration error types.

use thiserror::Error;

/// Errors that occur while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying configuration library error (missing/unparseable values).
    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors that occur during semantic validation of loaded configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' must be greater than zero")]
    Zero { field: &'static str },

    #[error("phone_min_digits ({min}) must not exceed phone_max_digits ({max})")]
    PhoneBoundsInverted { min: usize, max: usize },
}
