//! Inkpress - Blogging Core
//!
//! Server side of a blogging platform: accounts, post comments with live
//! streams, system notifications and password resets.
//!
//! # Overview
//!
//! Two in-process facilities carry the realtime and reset features:
//!
//! - **Notification hub** (`backend::realtime`) - Topic based fan-out to
//!   subscribers. Each post has its own topic and a global topic carries
//!   system notifications. Subscribers whose delivery fails are dropped.
//! - **Token store** (`backend::tokens`) - Single-use password reset tokens
//!   with a time to live.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared with clients
//!   - Comments, realtime events
//!   - Error types
//!
//! - **`backend`** - Axum server
//!   - HTTP handlers and routing
//!   - Hub, token store, in-memory stores
//!   - Authentication and mail
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpress::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> std::io::Result<()> {
//! let (app, shutdown) = create_app(ServerConfig::from_env()).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app)
//!     .with_graceful_shutdown(async move {
//!         let _ = tokio::signal::ctrl_c().await;
//!         shutdown.run().await;
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All server state lives behind `Arc` with `Mutex` or `RwLock`, and every
//! state handle is cheap to clone into handlers and background tasks.
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation and lookup failures
//! - `backend::tokens::TokenError` for token store failures
//! - `backend::BackendError` for everything that reaches an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
