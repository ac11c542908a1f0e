//! Error types for the domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A required structural field is absent or malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Numeric processing failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("Non-finite value for '{field}': {value}")]
    NonFinite { field: String, value: f64 },

    #[error("Job aborted: {0}")]
    Aborted(String),
}

impl ComputationError {
    /// Creates a non-finite value error.
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        ComputationError::NonFinite {
            field: field.into(),
            value,
        }
    }
}

/// Any error raised inside an engine component.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl EngineError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Validation(_) => ErrorCode::ValidationFailed,
            EngineError::Computation(_) => ErrorCode::ComputationFailed,
        }
    }
}

/// Rejects NaN and infinities in numeric input.
pub fn ensure_finite(field: &str, value: f64) -> Result<f64, ComputationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputationError::non_finite(field, value))
    }
}

/// Error codes reported across the component boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    ComputationFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::ComputationFailed => "COMPUTATION_FAILED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("issue.id");
        assert_eq!(format!("{}", err), "Field 'issue.id' cannot be empty");
    }

    #[test]
    fn aborted_job_is_a_computation_failure() {
        let err: EngineError = ComputationError::Aborted("task panicked".to_string()).into();
        assert_eq!(format!("{}", err), "Job aborted: task panicked");
        assert_eq!(err.code(), ErrorCode::ComputationFailed);
    }

    #[test]
    fn engine_error_is_transparent() {
        let err: EngineError = ValidationError::invalid_format("method", "unknown 'foo'").into();
        assert_eq!(format!("{}", err), "Field 'method' has invalid format: unknown 'foo'");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn computation_error_maps_to_computation_code() {
        let err: EngineError = ComputationError::non_finite("probability", f64::NAN).into();
        assert_eq!(err.code(), ErrorCode::ComputationFailed);
    }

    #[test]
    fn ensure_finite_rejects_infinity() {
        assert!(ensure_finite("x", 1.5).is_ok());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "VALIDATION_FAILED");
        assert_eq!(
            serde_json::to_string(&ErrorCode::ComputationFailed).unwrap(),
            "\"COMPUTATION_FAILED\""
        );
    }
}
