/**
 * Authentication Extractor
 *
 * Handlers that need a signed-in user take [`AuthUser`] as an argument. The
 * extractor reads `Authorization: Bearer <token>`, verifies the session token
 * against the configured secret and hands the handler the user it names.
 * Requests without a valid token are rejected with 401 before the handler
 * runs.
 */

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;
use crate::backend::server::config::ServerConfig;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use uuid::Uuid;

/// Authenticated user data extracted from a session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
}

/// Authenticate a raw `Authorization` header value
pub fn authenticate(secret: &str, header: Option<&str>) -> Result<AuthenticatedUser, BackendError> {
    let header = header.ok_or_else(|| {
        tracing::warn!("[Auth] Missing Authorization header");
        BackendError::unauthorized("Missing Authorization header")
    })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("[Auth] Invalid Authorization header format");
        BackendError::unauthorized("Invalid Authorization header")
    })?;

    let claims = verify_token(secret, token.trim()).map_err(|e| {
        tracing::warn!("[Auth] Invalid session token: {:?}", e);
        BackendError::unauthorized("Invalid session token")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("[Auth] Invalid user ID in token: {:?}", e);
        BackendError::unauthorized("Invalid session token")
    })?;

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
        username: claims.username,
    })
}

/// Axum extractor for the authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<ServerConfig>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<ServerConfig>::from_ref(state);
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        authenticate(&config.jwt_secret, header).map(AuthUser)
    }
}
