//! Error types shared by fixture loading and case execution.

use thiserror::Error;

/// Failures surfaced while loading fixtures or executing cases.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown operation '{operation}'")]
    UnknownOperation { operation: String },
    #[error("operation '{operation}': input '{field}' {reason}")]
    MalformedInput {
        operation: String,
        field: String,
        reason: String,
    },
}

impl HarnessError {
    /// Shorthand for input-shape violations reported by the executor.
    #[must_use]
    pub fn malformed(operation: &str, field: &str, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            operation: operation.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
