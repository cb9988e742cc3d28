/**
 * Ephemeral Token Store
 *
 * Single-use, time-limited tokens bound to an identity (an email address).
 * Used by the password reset flow.
 *
 * # Storage
 *
 * The raw token never touches the map. Records are keyed by the SHA-256 hex
 * digest of the token, so a dump of the store cannot be replayed. Tokens are
 * 32 bytes from the OS random source, hex encoded to 64 characters.
 *
 * # Semantics
 *
 * - `issue` revokes any token still outstanding for the same identity, so at
 *   most one token per identity can validate at any time
 * - `validate` removes the record it looks up, whatever the outcome, under
 *   one lock acquisition: of two concurrent calls with the same token, one
 *   gets the identity and the other gets `None`
 * - a token is expired once `now >= expires_at`, so a zero TTL never validates
 * - unknown, used, expired and malformed tokens are all `Ok(None)`; only
 *   system faults are errors
 */

use crate::backend::tokens::clock::{Clock, SystemClock};
use crate::backend::tokens::TokenError;
use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Random bytes per token (256 bits)
const TOKEN_BYTES: usize = 32;

/// Length of an encoded token
pub const TOKEN_LENGTH: usize = TOKEN_BYTES * 2;

#[derive(Debug, Clone)]
struct TokenRecord {
    identity: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct TokenMap {
    /// token digest -> record
    records: HashMap<String, TokenRecord>,
    /// identity -> digest of its outstanding token
    by_identity: HashMap<String, String>,
}

impl TokenMap {
    fn forget_identity(&mut self, identity: &str, digest: &str) {
        if self.by_identity.get(identity).map(String::as_str) == Some(digest) {
            self.by_identity.remove(identity);
        }
    }
}

/// Shared handle to the token map
#[derive(Clone)]
pub struct TokenStore {
    inner: Arc<Mutex<TokenMap>>,
    clock: Arc<dyn Clock>,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore {
    /// Create an empty store on the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store on a custom clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TokenMap::default())),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TokenMap>, TokenError> {
        self.inner.lock().map_err(|_| TokenError::StorePoisoned)
    }

    /// Issue a fresh token for `identity`, valid for `ttl`
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - If `identity` is blank or `ttl` overflows the calendar
    /// * `Entropy` - If the OS random source fails
    /// * `StorePoisoned` - If a previous holder of the lock panicked
    pub fn issue(&self, identity: &str, ttl: Duration) -> Result<String, TokenError> {
        if identity.trim().is_empty() {
            return Err(TokenError::invalid_argument("identity must not be empty"));
        }
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|_| TokenError::invalid_argument("ttl is out of range"))?;
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .ok_or_else(|| TokenError::invalid_argument("ttl is out of range"))?;

        let token = generate_token()?;
        let digest = hash_token(&token);

        let mut map = self.lock()?;
        if let Some(previous) = map.by_identity.insert(identity.to_string(), digest.clone()) {
            if map.records.remove(&previous).is_some() {
                tracing::debug!("[Tokens] Revoked previous token for {}", identity);
            }
        }
        map.records.insert(
            digest,
            TokenRecord {
                identity: identity.to_string(),
                expires_at,
            },
        );

        tracing::debug!("[Tokens] Issued token for {} (expires {})", identity, expires_at);
        Ok(token)
    }

    /// Consume `token` and return the identity it was issued for
    ///
    /// # Returns
    ///
    /// `Some(identity)` on the first validation of a live token, `None` for
    /// anything else.
    ///
    /// # Errors
    ///
    /// * `StorePoisoned` - If a previous holder of the lock panicked
    pub fn validate(&self, token: &str) -> Result<Option<String>, TokenError> {
        if !is_well_formed(token) {
            return Ok(None);
        }
        let digest = hash_token(token);
        let now = self.clock.now();

        let mut map = self.lock()?;
        let Some(record) = map.records.remove(&digest) else {
            return Ok(None);
        };
        map.forget_identity(&record.identity, &digest);

        if now >= record.expires_at {
            tracing::debug!("[Tokens] Discarded expired token for {}", record.identity);
            return Ok(None);
        }
        Ok(Some(record.identity))
    }

    /// Drop every expired record
    ///
    /// # Returns
    ///
    /// Number of records removed
    pub fn purge_expired(&self) -> Result<usize, TokenError> {
        let now = self.clock.now();
        let mut map = self.lock()?;
        let TokenMap {
            records,
            by_identity,
        } = &mut *map;

        let before = records.len();
        records.retain(|_, record| now < record.expires_at);
        by_identity.retain(|_, digest| records.contains_key(digest));
        Ok(before - records.len())
    }

    /// Number of outstanding records, expired ones included until purged
    pub fn len(&self) -> Result<usize, TokenError> {
        Ok(self.lock()?.records.len())
    }

    /// Whether no records are outstanding
    pub fn is_empty(&self) -> Result<bool, TokenError> {
        Ok(self.lock()?.records.is_empty())
    }
}

fn generate_token() -> Result<String, TokenError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::Entropy(e.to_string()))?;
    Ok(hex::encode(bytes))
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LENGTH && token.bytes().all(|b| b.is_ascii_hexdigit())
}
