//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, health check, layers
//! └── api_routes.rs   - API endpoints
//! ```
//!
//! # Route Types
//!
//! ## Authentication
//!
//! - `POST /api/auth/signup`
//! - `POST /api/auth/login`
//! - `POST /api/auth/password-reset`
//! - `POST /api/auth/password-reset/confirm`
//!
//! ## Comments
//!
//! - `GET|POST /api/posts/{post_id}/comments`
//! - `GET /api/posts/{post_id}/comments/stream`
//!
//! ## Notifications
//!
//! - `GET /api/notifications/stream`
//! - `POST /api/notifications`

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
