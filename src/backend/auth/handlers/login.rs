/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Accepts a username or an email address. Unknown accounts and wrong
 * passwords both answer 401 with the same message.
 */

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::create_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use axum::{extract::State, response::Json};

/// Message for every failed login
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the user is not found or the password is wrong
/// * `500 Internal Server Error` - If verification or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"username":"alice","password":"securepassword123"}
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("[Auth] Login request for: {}", request.username);

    let user = if request.username.contains('@') {
        state.users.get_by_email(&request.username)
    } else {
        state.users.get_by_username(&request.username)
    };
    let user = user.ok_or_else(|| {
        tracing::warn!("[Auth] User not found: {}", request.username);
        BackendError::unauthorized(INVALID_CREDENTIALS)
    })?;

    if !verify_password(request.password, user.password_hash.clone()).await? {
        tracing::warn!("[Auth] Invalid password for user: {}", user.username);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = create_token(&state.config.jwt_secret, user.id, &user.email, &user.username)
        .map_err(|e| BackendError::state(format!("Failed to create session token: {}", e)))?;

    tracing::info!("[Auth] User logged in: {} ({})", user.username, user.email);
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
