/**
 * SMTP Mailer
 *
 * Sends reset mail through an SMTP relay using lettre's async transport on
 * the tokio runtime. The connection is upgraded with STARTTLS.
 */

use crate::backend::mail::{reset_body, MailError, Mailer};
use crate::backend::server::config::SmtpConfig;
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Subject line of reset mail
const RESET_SUBJECT: &str = "Reset your password";

/// Mailer backed by an SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer from configuration
    ///
    /// No connection is opened until the first send.
    ///
    /// # Errors
    ///
    /// * `Address` - If `from` is not a valid mailbox
    /// * `Transport` - If the relay host is unusable
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| MailError::Address(format!("{}: {}", config.from, e)))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        tracing::info!("[Mail] SMTP relay {}:{}", config.host, config.port);
        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_reset_message(&self, to: &str, reset_link: &str) -> Result<Message, MailError> {
        let to: Mailbox = to
            .parse()
            .map_err(|e| MailError::Address(format!("{}: {}", to, e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(RESET_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(reset_body(reset_link))
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), MailError> {
        let message = self.build_reset_message(to, reset_link)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::info!("[Mail] Sent password reset mail to {}", to);
        Ok(())
    }
}
