/**
 * Password Reset Handlers
 *
 * POST /api/auth/password-reset
 * POST /api/auth/password-reset/confirm
 *
 * # Flow
 *
 * 1. The client posts an email address. If an account exists, a token is
 *    issued and a link is mailed in the background. The response is the
 *    same either way, so the endpoint cannot be used to probe for accounts.
 * 2. The client posts the token with a new password. The token is consumed
 *    on lookup; on success the credential is replaced.
 *
 * # Failure Reporting
 *
 * Confirmation fails with one message, `invalid or expired token`, whether
 * the token never existed, expired, or was already used.
 */

use crate::backend::auth::handlers::types::{
    ConfirmPasswordResetRequest, MessageResponse, PasswordResetRequest,
};
use crate::backend::auth::password::{hash_password, is_plausible_email, validate_password};
use crate::backend::auth::users::normalize_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::SharedError;
use axum::{extract::State, response::Json};

/// Response to every well-formed reset request
pub const RESET_REQUESTED_MESSAGE: &str =
    "If an account exists for that email, a password reset link has been sent.";

/// Response to a successful confirmation
pub const RESET_COMPLETED_MESSAGE: &str = "Password has been reset.";

/// Request a password reset link
///
/// # Errors
///
/// * `400 Bad Request` - If the email is not syntactically plausible
///
/// Token issuance and mail failures are logged, never returned.
///
/// # Example Request
///
/// ```http
/// POST /api/auth/password-reset HTTP/1.1
/// Content-Type: application/json
///
/// {"email":"alice@example.com"}
/// ```
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(request): Json<PasswordResetRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let email = normalize_email(&request.email);
    if !is_plausible_email(&email) {
        tracing::warn!("[Auth] Password reset requested with invalid email");
        return Err(SharedError::validation("email", "Invalid email format").into());
    }

    if state.users.get_by_email(&email).is_none() {
        tracing::info!("[Auth] Password reset requested for unknown account");
        return Ok(Json(MessageResponse::new(RESET_REQUESTED_MESSAGE)));
    }

    match state.tokens.issue(&email, state.config.reset_token_ttl) {
        Ok(token) => {
            let link = state.config.reset_link(&token);
            let mailer = state.mailer.clone();
            tokio::spawn(async move {
                if let Err(e) = mailer.send_password_reset(&email, &link).await {
                    tracing::warn!("[Auth] Failed to send password reset mail to {}: {}", email, e);
                }
            });
            tracing::info!("[Auth] Password reset token issued");
        }
        Err(e) => {
            tracing::error!("[Auth] Failed to issue password reset token: {}", e);
        }
    }

    Ok(Json(MessageResponse::new(RESET_REQUESTED_MESSAGE)))
}

/// Confirm a password reset
///
/// The password rules are checked before the token is looked up, so a
/// rejected password does not burn the token.
///
/// # Errors
///
/// * `400 Bad Request` - If the new password is invalid, or with
///   `invalid or expired token` if the token does not validate
/// * `500 Internal Server Error` - If the token store or hashing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/password-reset/confirm HTTP/1.1
/// Content-Type: application/json
///
/// {"token":"9f86d081...","new_password":"a-much-better-password"}
/// ```
pub async fn confirm_password_reset(
    State(state): State<AppState>,
    Json(request): Json<ConfirmPasswordResetRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    validate_password(&request.new_password)?;

    let Some(email) = state.tokens.validate(request.token.trim())? else {
        tracing::warn!("[Auth] Password reset confirmation with invalid token");
        return Err(BackendError::invalid_reset_token());
    };

    let password_hash = hash_password(request.new_password, state.config.bcrypt_cost).await?;
    match state.users.update_password(&email, password_hash) {
        Ok(()) => {}
        Err(SharedError::NotFound { .. }) => {
            tracing::warn!("[Auth] Reset token outlived its account");
            return Err(BackendError::invalid_reset_token());
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!("[Auth] Password reset completed");
    Ok(Json(MessageResponse::new(RESET_COMPLETED_MESSAGE)))
}
