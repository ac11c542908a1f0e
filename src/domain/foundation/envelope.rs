//! Result envelope returned across every component boundary.
//!
//! Serialized with an internal `status` tag so dispatchers see either
//! `{"status":"success", ...payload}` or
//! `{"status":"failed","error":"...","kind":"...","context":{...}}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{EngineError, ErrorCode};

/// Failure half of an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    pub error: String,
    pub kind: ErrorCode,
    /// Identifiers of the request that failed (e.g. party and issue ids).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
}

impl FailureReport {
    /// Creates a failure report from an engine error.
    pub fn from_error(err: &EngineError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.code(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

/// Success payload xor failure report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Envelope<T> {
    Success(T),
    Failed(FailureReport),
}

impl<T> Envelope<T> {
    /// Wraps a component result.
    pub fn from_result(result: Result<T, EngineError>) -> Self {
        match result {
            Ok(value) => Envelope::Success(value),
            Err(err) => Envelope::Failed(FailureReport::from_error(&err)),
        }
    }

    /// Returns true for a success envelope.
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    /// Returns the payload, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Envelope::Success(value) => Some(value),
            Envelope::Failed(_) => None,
        }
    }

    /// Consumes the envelope, returning the payload if successful.
    pub fn into_success(self) -> Option<T> {
        match self {
            Envelope::Success(value) => Some(value),
            Envelope::Failed(_) => None,
        }
    }

    /// Returns the failure report, if any.
    pub fn failure(&self) -> Option<&FailureReport> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failed(report) => Some(report),
        }
    }

    /// Maps the success payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        match self {
            Envelope::Success(value) => Envelope::Success(f(value)),
            Envelope::Failed(report) => Envelope::Failed(report),
        }
    }

    /// Adds a context entry to a failed envelope; success passes through.
    pub fn with_failure_context(self, key: &str, value: &str) -> Self {
        match self {
            Envelope::Failed(report) => Envelope::Failed(report.with_context(key, value)),
            success => success,
        }
    }
}
