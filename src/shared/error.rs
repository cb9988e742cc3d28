//! Shared Error Types
//!
//! Errors raised by the in-memory collaborators (comment store, user store)
//! and by request validation. The backend maps them onto HTTP status codes.
//!
//! # Error Categories
//!
//! - `ValidationError` - Input failed a field-level check
//! - `NotFound` - The requested entity does not exist
//! - `Conflict` - The entity already exists
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use inkpress::shared::error::SharedError;
//!
//! let error = SharedError::validation("content", "Comment cannot be empty");
//! ```
use thiserror::Error;

/// Error type shared by collaborators and handlers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Entity lookup failed
    #[error("{entity} not found")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
    },

    /// Entity already exists
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
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

    /// Create a new not-found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
