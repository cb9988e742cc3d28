//! Authentication Handlers Module
//!
//! HTTP handlers for account and password reset endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs             - Module exports and documentation
//! ├── types.rs           - Request and response types
//! ├── signup.rs          - User registration handler
//! ├── login.rs           - User authentication handler
//! └── password_reset.rs  - Reset request and confirmation handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup
//! - **`login`** - POST /api/auth/login
//! - **`request_password_reset`** - POST /api/auth/password-reset
//! - **`confirm_password_reset`** - POST /api/auth/password-reset/confirm

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Password reset handlers
pub mod password_reset;

pub use login::login;
pub use password_reset::{confirm_password_reset, request_password_reset};
pub use signup::signup;
pub use types::{
    AuthResponse, ConfirmPasswordResetRequest, LoginRequest, MessageResponse,
    PasswordResetRequest, SignupRequest, UserResponse,
};
