/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/password-reset` - Request a reset link
 * - `POST /api/auth/password-reset/confirm` - Set a new password with a reset token
 *
 * ## Comments
 * - `GET /api/posts/{post_id}/comments` - List comments
 * - `POST /api/posts/{post_id}/comments` - Add a comment (requires authentication)
 * - `GET /api/posts/{post_id}/comments/stream` - SSE stream of comments
 *
 * ## Notifications
 * - `GET /api/notifications/stream` - SSE stream of system notifications
 * - `POST /api/notifications` - Send a system notification (requires authentication)
 */

use crate::backend::auth::{confirm_password_reset, login, request_password_reset, signup};
use crate::backend::comments::{create_comment, handle_comment_subscription, list_comments};
use crate::backend::realtime::{handle_realtime_subscription, send_notification};
use crate::backend::server::state::AppState;
use axum::routing::{get, post};
use axum::Router;

/// Configure API routes
///
/// Authenticated routes check the `Authorization` header through the
/// `AuthUser` extractor, so public and authenticated methods can share a
/// path.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/password-reset", post(request_password_reset))
        .route(
            "/api/auth/password-reset/confirm",
            post(confirm_password_reset),
        )
        // Comment endpoints
        .route(
            "/api/posts/{post_id}/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/api/posts/{post_id}/comments/stream",
            get(handle_comment_subscription),
        )
        // System notifications
        .route(
            "/api/notifications/stream",
            get(handle_realtime_subscription),
        )
        .route("/api/notifications", post(send_notification))
}
