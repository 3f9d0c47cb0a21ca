//! Shared Error Types
//!
//! Errors raised while validating request payloads, before any
//! handler-specific context is attached.
//!
//! ```rust
//! use qa_dashboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("message", "Question cannot be empty");
//! assert!(error.to_string().contains("message"));
//! ```
use thiserror::Error;

/// Request payload validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A request field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
