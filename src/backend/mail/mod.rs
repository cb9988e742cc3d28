//! Mail Module
//!
//! Outgoing mail for the password reset flow. Handlers depend on the
//! [`Mailer`] trait only; the server picks an implementation at startup.
//!
//! # Implementations
//!
//! - **`SmtpMailer`** - Sends through an SMTP relay with lettre
//! - **`LogMailer`** - Writes the reset link to the log (development)
//!
//! # Module Structure
//!
//! ```text
//! mail/
//! ├── mod.rs   - Mailer trait and error type
//! ├── smtp.rs  - SMTP implementation
//! └── log.rs   - Logging implementation
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// SMTP mailer
pub mod smtp;

/// Logging mailer
pub mod log;

pub use self::log::LogMailer;
pub use self::smtp::SmtpMailer;

/// Mail delivery failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MailError {
    /// A sender or recipient address did not parse
    #[error("Invalid address: {0}")]
    Address(String),

    /// The message could not be assembled
    #[error("Failed to build message: {0}")]
    Build(String),

    /// The relay rejected the message or could not be reached
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Sink for outgoing mail
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a password reset link to `to`
    async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), MailError>;
}

/// Plain-text body of a reset mail
pub(crate) fn reset_body(reset_link: &str) -> String {
    format!(
        "Someone asked to reset the password for this address.\n\n\
         Open the link below to choose a new password:\n\n\
         {}\n\n\
         The link works only once and expires after a while. \
         If you did not ask for this, ignore this mail.\n",
        reset_link
    )
}
