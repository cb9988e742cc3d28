/**
 * Server Configuration
 *
 * Configuration is read from environment variables (after `.env` has been
 * loaded by `main`), with defaults that work for local development.
 *
 * # Variables
 *
 * - `SERVER_HOST` / `SERVER_PORT` - Bind address (`0.0.0.0:3000`)
 * - `JWT_SECRET` - Session signing key
 * - `PUBLIC_URL` - Base URL used in password reset links
 * - `RESET_TOKEN_TTL_SECS` - Reset token lifetime (24 hours)
 * - `TOKEN_SWEEP_INTERVAL_SECS` - Expiry sweep period (5 minutes)
 * - `BCRYPT_COST` - Password hashing cost
 * - `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`, `SMTP_PASSWORD`, `SMTP_FROM` -
 *   Outgoing mail; without `SMTP_HOST` reset links are only logged
 *
 * # Error Handling
 *
 * Unparseable values are logged and replaced by their default. Startup never
 * fails on configuration.
 */

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Session signing key used when `JWT_SECRET` is unset
const DEV_JWT_SECRET: &str = "inkpress-dev-secret-change-in-production";

/// Default reset token lifetime
pub const DEFAULT_RESET_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default expiry sweep period
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Outgoing mail settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,
    /// SMTP port (587 for STARTTLS)
    pub port: u16,
    /// Optional login
    pub username: Option<String>,
    /// Optional password
    pub password: Option<String>,
    /// Sender address, e.g. `Inkpress <noreply@example.com>`
    pub from: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Session signing key
    pub jwt_secret: String,
    /// Base URL of the site, without trailing slash
    pub public_url: String,
    /// Lifetime of password reset tokens
    pub reset_token_ttl: Duration,
    /// How often expired tokens are purged
    pub token_sweep_interval: Duration,
    /// bcrypt cost for password hashes
    pub bcrypt_cost: u32,
    /// Outgoing mail, if configured
    pub smtp: Option<SmtpConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            public_url: "http://localhost:3000".to_string(),
            reset_token_ttl: DEFAULT_RESET_TOKEN_TTL,
            token_sweep_interval: DEFAULT_SWEEP_INTERVAL,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            smtp: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Example
    ///
    /// ```rust
    /// use inkpress::backend::server::config::ServerConfig;
    ///
    /// let config = ServerConfig::from_env();
    /// assert!(!config.jwt_secret.is_empty());
    /// ```
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("[Config] JWT_SECRET not set, using development secret");
                defaults.jwt_secret
            }
        };

        let bcrypt_cost = env_or("BCRYPT_COST", defaults.bcrypt_cost);
        let bcrypt_cost = if (4..=31).contains(&bcrypt_cost) {
            bcrypt_cost
        } else {
            tracing::warn!("[Config] BCRYPT_COST {} out of range 4-31, using default", bcrypt_cost);
            defaults.bcrypt_cost
        };

        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env_or("SERVER_PORT", defaults.port),
            jwt_secret,
            public_url: std::env::var("PUBLIC_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.public_url),
            reset_token_ttl: Duration::from_secs(env_or(
                "RESET_TOKEN_TTL_SECS",
                defaults.reset_token_ttl.as_secs(),
            )),
            token_sweep_interval: Duration::from_secs(env_or(
                "TOKEN_SWEEP_INTERVAL_SECS",
                defaults.token_sweep_interval.as_secs(),
            )),
            bcrypt_cost,
            smtp: load_smtp(),
        }
    }

    /// Address to bind the listener to
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Link sent by mail for a reset token
    pub fn reset_link(&self, token: &str) -> String {
        format!("{}/reset-password?token={}", self.public_url, token)
    }
}

/// Read and parse an environment variable, falling back to `default`
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("[Config] Invalid {}={:?}, using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn load_smtp() -> Option<SmtpConfig> {
    let host = match std::env::var("SMTP_HOST") {
        Ok(host) if !host.is_empty() => host,
        _ => {
            tracing::info!("[Config] SMTP_HOST not set, reset links will be logged");
            return None;
        }
    };

    Some(SmtpConfig {
        host,
        port: env_or("SMTP_PORT", 587),
        username: std::env::var("SMTP_USERNAME").ok().filter(|u| !u.is_empty()),
        password: std::env::var("SMTP_PASSWORD").ok().filter(|p| !p.is_empty()),
        from: std::env::var("SMTP_FROM")
            .unwrap_or_else(|_| "Inkpress <noreply@localhost>".to_string()),
    })
}
