/**
 * Backend Error Types
 *
 * Errors returned by HTTP handlers. Each variant knows its status code;
 * `conversion` turns them into JSON responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Request-level failures with an explicit status: bad input, missing or
 * invalid credentials, a reset token that did not validate.
 *
 * ## State Errors
 *
 * A collaborator could not be used (lock poisoned, snapshot not delivered).
 * Always 500; the detail is logged, not returned.
 *
 * ## Wrapped Errors
 *
 * `SharedError`, `TokenError` and `serde_json::Error` convert with `?`.
 */

use crate::backend::tokens::TokenError;
use crate::shared::SharedError;
use axum::http::StatusCode;
use thiserror::Error;

/// Message returned for every failed reset confirmation
pub const INVALID_RESET_TOKEN: &str = "invalid or expired token";

/// Message returned for every internal failure
const INTERNAL_ERROR: &str = "Internal server error";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// State management error (e.g., lock acquisition failure)
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Token store error
    #[error(transparent)]
    TokenError(#[from] TokenError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Example
    ///
    /// ```rust
    /// use inkpress::backend::error::BackendError;
    /// use axum::http::StatusCode;
    ///
    /// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
    /// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    /// ```
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// 401 with the given message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// The one 400 a reset confirmation may fail with
    ///
    /// Unknown, expired and already used tokens all map here.
    pub fn invalid_reset_token() -> Self {
        Self::handler(StatusCode::BAD_REQUEST, INVALID_RESET_TOKEN)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `StateError` - 500 Internal Server Error
    /// - `SharedError` - 400 validation, 404 not found, 409 conflict, 500 serialization
    /// - `TokenError` - 400 invalid argument, 500 otherwise
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::NotFound { .. } => StatusCode::NOT_FOUND,
                SharedError::Conflict { .. } => StatusCode::CONFLICT,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::TokenError(err) if err.is_system_fault() => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TokenError(_) => StatusCode::BAD_REQUEST,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal failures share one generic message.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return INTERNAL_ERROR.to_string();
        }
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StateError { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::TokenError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}
