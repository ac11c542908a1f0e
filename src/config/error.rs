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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Grid resolution must be at least 2, got {0}")]
    GridResolutionTooSmall(usize),

    #[error("Grid resolution must be at most {max}, got {actual}")]
    GridResolutionTooLarge { max: usize, actual: usize },

    #[error("Combination cap must be at least 1")]
    InvalidCombinationCap,

    #[error("Combination cap must be at most {max}, got {actual}")]
    CombinationCapTooLarge { max: usize, actual: usize },

    #[error("Default max frontier points must be at least 1")]
    InvalidMaxPoints,

    #[error("Risk note threshold must be within [0, 1], got {0}")]
    InvalidRiskThreshold(f64),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),

    #[error("Max concurrent jobs must be between 1 and {max}, got {actual}")]
    InvalidConcurrency { max: usize, actual: usize },
}
