/**
 * Logging Mailer
 *
 * Stand-in used when no SMTP relay is configured. The reset link goes to the
 * log at info level so a developer can follow the flow locally.
 */

use crate::backend::mail::{MailError, Mailer};
use async_trait::async_trait;

/// Mailer that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), MailError> {
        tracing::info!("[Mail] Password reset for {}: {}", to, reset_link);
        Ok(())
    }
}
