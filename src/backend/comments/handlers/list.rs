/**
 * List Comments Handler
 *
 * GET /api/posts/{post_id}/comments
 */

use crate::backend::comments::store::CommentStore;
use crate::backend::comments::validation::validate_post_id;
use crate::backend::error::BackendError;
use crate::shared::Comment;
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

/// Comments of one post
#[derive(Debug, Deserialize, Serialize)]
pub struct CommentListResponse {
    /// Post the comments belong to
    pub post_id: String,
    /// Comments, oldest first
    pub comments: Vec<Comment>,
}

/// List the comments of a post
///
/// # Errors
///
/// * `400 Bad Request` - If the post ID is invalid
pub async fn list_comments(
    State(comments): State<CommentStore>,
    Path(post_id): Path<String>,
) -> Result<Json<CommentListResponse>, BackendError> {
    validate_post_id(&post_id)?;
    let comments = comments.list(&post_id);
    Ok(Json(CommentListResponse { post_id, comments }))
}
