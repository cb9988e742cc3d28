/**
 * Password Hashing and Input Rules
 *
 * bcrypt is CPU-bound, so hashing and verification run on the blocking pool
 * instead of an async worker.
 */

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// Minimum password length (characters)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// bcrypt only reads the first 72 bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Check password length rules
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}

/// Usernames are 3-30 chars, start with a letter, then letters, digits or `_`
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }
    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Loose syntactic check: one `@` with text on both sides, no whitespace
pub fn is_plausible_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Hash a password with bcrypt at `cost`
pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| BackendError::state(format!("Hashing task failed: {}", e)))?
        .map_err(|e| BackendError::state(format!("Failed to hash password: {}", e)))
}

/// Check a password against a bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, BackendError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| BackendError::state(format!("Verification task failed: {}", e)))?
        .map_err(|e| BackendError::state(format!("Failed to verify password: {}", e)))
}
