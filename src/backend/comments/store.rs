/**
 * Comment Store
 *
 * In-memory comments grouped by post, kept in insertion order.
 *
 * The create handler calls `add` from inside `NotificationHub::publish_with`
 * and the stream handler calls `list` from inside
 * `NotificationHub::subscribe_with_snapshot`. Both therefore run with the hub
 * lock held; this store must never call back into the hub.
 */

use crate::shared::Comment;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to stored comments
#[derive(Debug, Clone, Default)]
pub struct CommentStore {
    posts: Arc<RwLock<HashMap<String, Vec<Comment>>>>,
}

impl CommentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment to its post and return the stored copy
    pub fn add(&self, comment: Comment) -> Comment {
        let mut posts = self.posts.write().unwrap_or_else(PoisonError::into_inner);
        posts
            .entry(comment.post_id.clone())
            .or_default()
            .push(comment.clone());
        comment
    }

    /// All comments of a post, oldest first
    pub fn list(&self, post_id: &str) -> Vec<Comment> {
        let posts = self.posts.read().unwrap_or_else(PoisonError::into_inner);
        posts.get(post_id).cloned().unwrap_or_default()
    }

    /// Number of comments on a post
    pub fn count(&self, post_id: &str) -> usize {
        let posts = self.posts.read().unwrap_or_else(PoisonError::into_inner);
        posts.get(post_id).map_or(0, Vec::len)
    }
}
