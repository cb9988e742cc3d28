/**
 * Create Comment Handler
 *
 * POST /api/posts/{post_id}/comments
 *
 * Stores the comment and announces it with a `new_comment` event on the
 * post's topic. Storing and publishing happen inside one
 * `NotificationHub::publish_with` call, so a stream opened concurrently sees
 * the comment exactly once: in its snapshot or as a live event.
 */

use crate::backend::comments::validation::{validate_content, validate_post_id};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::realtime::post_topic;
use crate::backend::server::state::AppState;
use crate::shared::{Comment, RealtimeEvent};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

/// New comment body
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCommentRequest {
    /// Comment text (1-5000 characters after trimming)
    pub content: String,
}

/// Create a comment on a post
///
/// Requires a valid session token; the author is the signed-in user.
///
/// # Errors
///
/// * `400 Bad Request` - If the post ID or content is invalid
/// * `401 Unauthorized` - If the session token is missing or invalid
///
/// # Example Request
///
/// ```http
/// POST /api/posts/hello-world/comments HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {"content":"Great post!"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id":"...","post_id":"hello-world","author":"alice","content":"Great post!","created_at":"..."}
/// ```
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), BackendError> {
    validate_post_id(&post_id).inspect_err(|_| {
        tracing::warn!("[Comments] Rejected comment for invalid post ID from {}", user.username);
    })?;
    let content = validate_content(&request.content).inspect_err(|_| {
        tracing::warn!("[Comments] Rejected invalid comment on {} from {}", post_id, user.username);
    })?;

    let comment = Comment::new(post_id.as_str(), user.username.as_str(), content);
    let comments = state.comments.clone();
    let stored = comment.clone();

    let delivered = state.hub.publish_with(&post_topic(&post_id), move || {
        RealtimeEvent::new_comment(&comments.add(stored))
    });

    tracing::info!(
        "[Comments] {} commented on {} ({} live subscribers)",
        user.username,
        post_id,
        delivered
    );
    Ok((StatusCode::CREATED, Json(comment)))
}
