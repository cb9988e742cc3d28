/**
 * User Store
 *
 * In-memory user accounts keyed by normalized (lowercase) email. Usernames
 * are unique too. Password hashes are bcrypt strings produced by the caller.
 *
 * The store is the credential collaborator of the password reset flow:
 * `update_password` replaces a hash atomically under the write lock.
 */

use crate::shared::SharedError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// Email address, lowercase
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Canonical form of an email address used for lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Default)]
struct UserMap {
    by_email: HashMap<String, User>,
}

/// Shared handle to the user accounts
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<UserMap>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, UserMap> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserMap> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a new user
    ///
    /// # Errors
    ///
    /// * `Conflict` - If the email or username is already registered
    pub fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: String,
    ) -> Result<User, SharedError> {
        let email = normalize_email(email);
        let mut users = self.write();

        if users.by_email.contains_key(&email) {
            return Err(SharedError::conflict("Email already registered"));
        }
        if users
            .by_email
            .values()
            .any(|u| u.username.eq_ignore_ascii_case(username))
        {
            return Err(SharedError::conflict("Username already taken"));
        }

        let now = Utc::now();
        let user = User {
            id: uuid::Uuid::new_v4(),
            username: username.to_string(),
            email: email.clone(),
            password_hash,
            created_at: now,
            updated_at: now,
        };
        users.by_email.insert(email, user.clone());
        Ok(user)
    }

    /// Get user by email
    pub fn get_by_email(&self, email: &str) -> Option<User> {
        self.read().by_email.get(&normalize_email(email)).cloned()
    }

    /// Get user by username (case-insensitive)
    pub fn get_by_username(&self, username: &str) -> Option<User> {
        self.read()
            .by_email
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned()
    }

    /// Replace the password hash of the account registered under `email`
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no account uses `email`
    pub fn update_password(&self, email: &str, password_hash: String) -> Result<(), SharedError> {
        let mut users = self.write();
        let user = users
            .by_email
            .get_mut(&normalize_email(email))
            .ok_or_else(|| SharedError::not_found("User"))?;
        user.password_hash = password_hash;
        user.updated_at = Utc::now();
        Ok(())
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.read().by_email.len()
    }

    /// Whether no users are registered
    pub fn is_empty(&self) -> bool {
        self.read().by_email.is_empty()
    }
}
