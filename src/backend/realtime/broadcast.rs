/**
 * System Notification Broadcast
 *
 * HTTP entry point for publishing on the global topic. Every client
 * connected to `/api/notifications/stream` receives the notice; clients that
 * connect later do not.
 */

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::realtime::hub::NotificationHub;
use crate::shared::{RealtimeEvent, SharedError};
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

/// Maximum notification title length (characters)
const MAX_TITLE_LENGTH: usize = 200;

/// Maximum notification body length (characters)
const MAX_MESSAGE_LENGTH: usize = 2000;

/// Notification to broadcast
#[derive(Debug, Deserialize, Serialize)]
pub struct NotificationRequest {
    /// Short headline
    pub title: String,
    /// Notification body
    pub message: String,
}

/// Result of a broadcast
#[derive(Debug, Deserialize, Serialize)]
pub struct NotificationResponse {
    /// Number of connected subscribers that received the notice
    pub delivered: usize,
}

/// Send a system notification (POST /api/notifications)
///
/// Requires a valid session token.
///
/// # Errors
///
/// * `400 Bad Request` - If the title or message is empty or too long
/// * `401 Unauthorized` - If the session token is missing or invalid
///
/// # Example Request
///
/// ```http
/// POST /api/notifications HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {"title":"Maintenance","message":"The site will be read-only at 22:00 UTC"}
/// ```
pub async fn send_notification(
    State(hub): State<NotificationHub>,
    AuthUser(user): AuthUser,
    Json(request): Json<NotificationRequest>,
) -> Result<Json<NotificationResponse>, BackendError> {
    let title = request.title.trim();
    let message = request.message.trim();

    if title.is_empty() || title.chars().count() > MAX_TITLE_LENGTH {
        tracing::warn!("[Realtime] Rejected notification with invalid title from {}", user.username);
        return Err(SharedError::validation(
            "title",
            format!("Title must be 1-{} characters", MAX_TITLE_LENGTH),
        )
        .into());
    }
    if message.is_empty() || message.chars().count() > MAX_MESSAGE_LENGTH {
        tracing::warn!("[Realtime] Rejected notification with invalid message from {}", user.username);
        return Err(SharedError::validation(
            "message",
            format!("Message must be 1-{} characters", MAX_MESSAGE_LENGTH),
        )
        .into());
    }

    let delivered = hub.publish_global(RealtimeEvent::notification(title, message));
    tracing::info!("[Realtime] {} broadcast a notification to {} subscribers", user.username, delivered);

    Ok(Json(NotificationResponse { delivered }))
}
