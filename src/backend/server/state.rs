/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container. It holds:
 * - The notification hub for live streams
 * - The reset token store
 * - Comment and user stores
 * - The mailer used for reset links
 * - Server configuration
 *
 * Every field is a cheap handle over shared state, so cloning `AppState`
 * per request is fine.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers take only the part they need,
 * e.g. `State<NotificationHub>` or `State<CommentStore>`.
 *
 * # Example
 *
 * ```rust
 * use inkpress::backend::server::config::ServerConfig;
 * use inkpress::backend::server::state::AppState;
 *
 * let state = AppState::for_config(ServerConfig::default());
 * assert_eq!(state.hub.topic_count(), 0);
 * ```
 */

use crate::backend::auth::users::UserStore;
use crate::backend::comments::store::CommentStore;
use crate::backend::mail::log::LogMailer;
use crate::backend::mail::Mailer;
use crate::backend::realtime::NotificationHub;
use crate::backend::server::config::ServerConfig;
use crate::backend::tokens::TokenStore;
use axum::extract::FromRef;
use std::sync::Arc;

/// Application state
///
/// Shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Topic hub behind every live stream
    pub hub: NotificationHub,
    /// Password reset tokens
    pub tokens: TokenStore,
    /// Post comments
    pub comments: CommentStore,
    /// Registered accounts
    pub users: UserStore,
    /// Outgoing mail
    pub mailer: Arc<dyn Mailer>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create state with empty stores
    pub fn new(config: ServerConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            hub: NotificationHub::new(),
            tokens: TokenStore::new(),
            comments: CommentStore::new(),
            users: UserStore::new(),
            mailer,
            config: Arc::new(config),
        }
    }

    /// Create state that logs reset links instead of mailing them
    pub fn for_config(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(LogMailer))
    }
}

impl FromRef<AppState> for NotificationHub {
    fn from_ref(state: &AppState) -> Self {
        state.hub.clone()
    }
}

impl FromRef<AppState> for TokenStore {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for CommentStore {
    fn from_ref(state: &AppState) -> Self {
        state.comments.clone()
    }
}

impl FromRef<AppState> for UserStore {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn Mailer> {
    fn from_ref(state: &AppState) -> Self {
        state.mailer.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
