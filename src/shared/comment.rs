/**
 * Comment Data Structure
 *
 * A comment left on a blog post. Comments are immutable once stored; the
 * comment store hands out clones.
 */
use serde::{Deserialize, Serialize};

/// Comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Unique comment ID
    pub id: uuid::Uuid,
    /// Post the comment belongs to
    pub post_id: String,
    /// Display name of the author
    pub author: String,
    /// Comment body
    pub content: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl Comment {
    /// Create a new comment with a fresh ID and the current time
    pub fn new(
        post_id: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            post_id: post_id.into(),
            author: author.into(),
            content: content.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
