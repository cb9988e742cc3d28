//! Authentication Module
//!
//! User accounts, session tokens and the password reset flow.
//!
//! # Architecture
//!
//! - **`users`** - In-memory user store, the credential collaborator
//! - **`sessions`** - JWT session tokens
//! - **`password`** - bcrypt hashing and input rules
//! - **`handlers`** - HTTP handlers
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User store
//! ├── sessions.rs     - JWT token management
//! ├── password.rs     - Password hashing and validation
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Failed logins do not reveal whether the account exists
//! - Reset requests answer the same for known and unknown addresses
//! - Reset confirmation failures all read `invalid or expired token`

/// User store
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Password hashing and input rules
pub mod password;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{confirm_password_reset, login, request_password_reset, signup};
pub use users::{User, UserStore};
