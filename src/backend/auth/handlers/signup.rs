/**
 * Signup Handler
 *
 * POST /api/auth/signup
 *
 * # Registration Process
 *
 * 1. Validate username, email and password
 * 2. Hash the password with bcrypt
 * 3. Create the user (fails on duplicate email or username)
 * 4. Return a session token and the user info
 */

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::password::{
    hash_password, is_plausible_email, is_valid_username, validate_password,
};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::normalize_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::SharedError;
use axum::{extract::State, http::StatusCode, response::Json};

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If the username, email or password is invalid
/// * `409 Conflict` - If the email or username is already registered
/// * `500 Internal Server Error` - If hashing or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {"username":"alice","email":"alice@example.com","password":"securepassword123"}
/// ```
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let email = normalize_email(&request.email);
    tracing::info!("[Auth] Signup request for {} ({})", request.username, email);

    if !is_valid_username(&request.username) {
        tracing::warn!("[Auth] Invalid username format: {}", request.username);
        return Err(SharedError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        )
        .into());
    }
    if !is_plausible_email(&email) {
        tracing::warn!("[Auth] Invalid email format: {}", email);
        return Err(SharedError::validation("email", "Invalid email format").into());
    }
    validate_password(&request.password)?;

    let password_hash = hash_password(request.password, state.config.bcrypt_cost).await?;
    let user = state.users.create(&request.username, &email, password_hash)?;

    let token = create_token(&state.config.jwt_secret, user.id, &user.email, &user.username)
        .map_err(|e| BackendError::state(format!("Failed to create session token: {}", e)))?;

    tracing::info!("[Auth] User created: {} ({})", user.username, user.email);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}
