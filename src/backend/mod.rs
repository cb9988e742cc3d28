//! Backend Module
//!
//! All server-side code: an Axum HTTP server with live comment streams,
//! system notifications, accounts and password resets.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`realtime`** - Notification hub and SSE streaming
//! - **`tokens`** - Ephemeral password reset token store
//! - **`comments`** - Comment store and handlers
//! - **`auth`** - Accounts, sessions, password reset handlers
//! - **`mail`** - Outgoing mail
//! - **`middleware`** - Request authentication
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── realtime/       - Hub and SSE
//! ├── tokens/         - Reset tokens
//! ├── comments/       - Comments
//! ├── auth/           - Authentication
//! ├── mail/           - Mail delivery
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the hub, the token store, the comment and user stores,
//! the mailer and the configuration. Handlers extract either the whole state
//! or one part of it through `FromRef`.
//!
//! # Realtime Delivery
//!
//! Live streams are Server-Sent Events. A stream registers an unbounded
//! channel sender with the hub; when the client goes away the receiver is
//! dropped, the next publish fails to deliver and the hub removes the
//! subscriber. Dropping the stream also unsubscribes it eagerly.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Notification hub and live streams
pub mod realtime;

/// Password reset tokens
pub mod tokens;

/// Post comments
pub mod comments;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Outgoing mail
pub mod mail;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use realtime::NotificationHub;
pub use server::{create_app, AppState};
pub use tokens::TokenStore;
