//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-process app with a recording mailer
//! - Authentication test helpers
//! - An SSE frame reader

pub mod app;
pub mod auth_helpers;
pub mod sse;

// Re-export commonly used utilities
pub use app::*;
pub use auth_helpers::*;
pub use sse::*;
