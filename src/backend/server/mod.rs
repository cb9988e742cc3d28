//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading from the environment
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - ServerConfig and SmtpConfig
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Mailer Selection**: SMTP or logging
//! 3. **State Creation**: hub, token store, comment and user stores
//! 4. **Background Tasks**: expired token sweeper
//! 5. **Router Creation**: routes and middleware
//! 6. **Shutdown Hook**: closes live subscriptions and stops the sweeper
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpress::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() {
//! let (app, shutdown) = create_app(ServerConfig::from_env()).await;
//! # let _ = (app, shutdown);
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::{create_app, Shutdown};
pub use state::AppState;
