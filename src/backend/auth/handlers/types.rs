/**
 * Authentication Handler Types
 *
 * Request and response bodies of the signup, login and password reset
 * endpoints.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// Chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// Email address
    pub email: String,
    /// Password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Username or email address
    pub username: String,
    /// Password
    pub password: String,
}

/// Auth response returned by signup and login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Session token
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User information safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User ID (UUID)
    pub id: String,
    /// Username
    pub username: String,
    /// Email address
    pub email: String,
}

impl From<crate::backend::auth::users::User> for UserResponse {
    fn from(user: crate::backend::auth::users::User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
        }
    }
}

/// Password reset request
#[derive(Deserialize, Serialize, Debug)]
pub struct PasswordResetRequest {
    /// Email address of the account
    pub email: String,
}

/// Password reset confirmation
#[derive(Deserialize, Serialize, Debug)]
pub struct ConfirmPasswordResetRequest {
    /// Token from the reset link
    pub token: String,
    /// New password
    pub new_password: String,
}

/// Plain status message
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
