/**
 * Server Initialization
 *
 * Builds the application state from configuration, starts background tasks
 * and assembles the router.
 *
 * # Initialization Process
 *
 * 1. Pick a mailer (SMTP when configured, otherwise the logging mailer)
 * 2. Create the shared state
 * 3. Start the reset token sweeper
 * 4. Create the router
 *
 * # Shutdown
 *
 * `create_app` also returns a [`Shutdown`] hook. Run it once the stop signal
 * arrives: it ends every open event stream, so graceful shutdown does not
 * wait on long-lived SSE responses, and stops the sweeper.
 */

use crate::backend::mail::log::LogMailer;
use crate::backend::mail::smtp::SmtpMailer;
use crate::backend::mail::Mailer;
use crate::backend::realtime::NotificationHub;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::tokens::spawn_sweeper;
use axum::Router;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Teardown for everything `create_app` started
pub struct Shutdown {
    hub: NotificationHub,
    sweeper: JoinHandle<()>,
}

impl Shutdown {
    /// Close all subscriptions and stop the token sweeper
    pub async fn run(self) {
        let closed = self.hub.close_all();
        self.sweeper.abort();
        // JoinError::Cancelled is the expected outcome
        let _ = self.sweeper.await;
        tracing::info!(
            "[Server] Closed {} live subscriptions, token sweeper stopped",
            closed
        );
    }
}

/// Create and configure the Axum application
///
/// Must be called from within a tokio runtime; the token sweeper is spawned
/// onto it. The returned [`Shutdown`] tears down the hub subscriptions and the
/// sweeper.
///
/// # Error Handling
///
/// An SMTP configuration that cannot be turned into a transport is logged
/// and replaced by the logging mailer, so startup does not fail on mail.
pub async fn create_app(config: ServerConfig) -> (Router<()>, Shutdown) {
    tracing::info!("[Server] Initializing Inkpress backend");

    let mailer = load_mailer(&config);
    let sweep_interval = config.token_sweep_interval;
    let state = AppState::new(config, mailer);

    let sweeper = spawn_sweeper(state.tokens.clone(), sweep_interval);
    tracing::info!(
        "[Server] Token sweeper running every {}s",
        sweep_interval.as_secs()
    );

    let shutdown = Shutdown {
        hub: state.hub.clone(),
        sweeper,
    };
    (create_router(state), shutdown)
}

fn load_mailer(config: &ServerConfig) -> Arc<dyn Mailer> {
    let Some(smtp) = &config.smtp else {
        tracing::info!("[Mail] No SMTP relay configured, reset links will be logged");
        return Arc::new(LogMailer);
    };

    match SmtpMailer::new(smtp) {
        Ok(mailer) => {
            tracing::info!("[Mail] Sending through {}:{}", smtp.host, smtp.port);
            Arc::new(mailer)
        }
        Err(e) => {
            tracing::warn!("[Mail] SMTP setup failed ({}), falling back to log mailer", e);
            Arc::new(LogMailer)
        }
    }
}
