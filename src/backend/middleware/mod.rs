//! Middleware Module
//!
//! Request processing shared by several handlers.
//!
//! - **`auth`** - Session token extractor for protected handlers

pub mod auth;

pub use auth::{authenticate, AuthUser, AuthenticatedUser};
