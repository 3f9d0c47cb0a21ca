/**
 * Backend Error Types
 *
 * Errors raised while serving HTTP requests. Each variant maps to a status
 * code and a human-readable message that is returned to the client.
 *
 * # Status Mapping
 *
 * - `HandlerError` - carries its own status
 * - `StoreError` - 500, with the store's error text
 * - `SharedError` - 422
 * - `SerializationError` - 500
 */
use crate::backend::store::StoreError;
use crate::shared::SharedError;
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request-level failure with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Message returned as `detail`
        message: String,
    },

    /// Persistence failure
    #[error(transparent)]
    StoreError(#[from] StoreError),

    /// Request validation failure
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StoreError(err) => err.to_string(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}
