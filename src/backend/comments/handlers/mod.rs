//! Comment Handlers Module
//!
//! # Handlers
//!
//! - **`list_comments`** - GET /api/posts/{post_id}/comments
//! - **`create_comment`** - POST /api/posts/{post_id}/comments (authenticated)
//! - **`handle_comment_subscription`** - GET /api/posts/{post_id}/comments/stream

/// List handler
pub mod list;

/// Create handler
pub mod create;

/// SSE stream handler
pub mod subscription;

pub use create::{create_comment, CreateCommentRequest};
pub use list::{list_comments, CommentListResponse};
pub use subscription::handle_comment_subscription;
