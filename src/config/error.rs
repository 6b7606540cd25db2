//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Pursue threshold must be greater than zero")]
    InvalidPursueThreshold,

    #[error("Pending threshold ({pending}) must be below pursue threshold ({pursue})")]
    ThresholdOrder { pursue: u32, pending: u32 },

    #[error("Invalid PDF timeout (must be 1-300 seconds)")]
    InvalidTimeout,

    #[error("Export output directory must not be empty")]
    EmptyOutputDir,

    #[error("Invalid export base filename: {0}")]
    InvalidBaseFilename(String),

    #[error("Log level must not be empty")]
    EmptyLogLevel,
}
