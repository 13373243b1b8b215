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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Aggregation window must be at least one day")]
    WindowTooShort,

    #[error("Trend margin must be non-negative")]
    NegativeTrendMargin,

    #[error("Difficulty threshold must be between 0 and 100")]
    ThresholdOutOfRange,

    #[error("Hard threshold must be below the easy threshold")]
    ThresholdsInverted,
}
