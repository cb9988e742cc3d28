//! Ephemeral Token Module
//!
//! Single-use, time-limited tokens for the password reset flow.
//!
//! # Architecture
//!
//! - **`store`** - Token map with issue/validate/purge
//! - **`clock`** - Injectable time source
//! - **`sweeper`** - Background task purging expired tokens
//!
//! # Module Structure
//!
//! ```text
//! tokens/
//! ├── mod.rs      - Module exports and error type
//! ├── store.rs    - Token store
//! ├── clock.rs    - System and manual clocks
//! └── sweeper.rs  - Periodic expiry sweep
//! ```
//!
//! # Error Handling
//!
//! A bad token is not an error: `validate` reports it as `Ok(None)`.
//! [`TokenError`] is reserved for bad input to `issue` and for faults of the
//! store itself.
//!
//! # Example
//!
//! ```rust
//! use inkpress::backend::tokens::TokenStore;
//! use std::time::Duration;
//!
//! let store = TokenStore::new();
//! let token = store.issue("a@x.com", Duration::from_secs(86_400)).unwrap();
//! assert_eq!(store.validate(&token).unwrap().as_deref(), Some("a@x.com"));
//! assert_eq!(store.validate(&token).unwrap(), None);
//! ```

use thiserror::Error;

/// Token store
pub mod store;

/// Time source
pub mod clock;

/// Expiry sweeper
pub mod sweeper;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::TokenStore;
pub use sweeper::spawn_sweeper;

/// Token store failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Rejected input to `issue`
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The OS random source failed
    #[error("Random source unavailable: {0}")]
    Entropy(String),

    /// The store lock was poisoned by a panicking holder
    #[error("Token store lock poisoned")]
    StorePoisoned,
}

impl TokenError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether the error is a fault of the system rather than of the input
    pub fn is_system_fault(&self) -> bool {
        !matches!(self, Self::InvalidArgument(_))
    }
}
