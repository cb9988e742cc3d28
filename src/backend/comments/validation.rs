/**
 * Comment Input Rules
 */

use crate::shared::SharedError;

/// Maximum comment length (characters)
pub const MAX_COMMENT_LENGTH: usize = 5000;

/// Maximum post ID length
pub const MAX_POST_ID_LENGTH: usize = 128;

/// Post IDs are 1-128 chars of `[A-Za-z0-9_-]`
pub fn validate_post_id(post_id: &str) -> Result<(), SharedError> {
    let valid = !post_id.is_empty()
        && post_id.len() <= MAX_POST_ID_LENGTH
        && post_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(SharedError::validation(
            "post_id",
            format!(
                "Post ID must be 1-{} letters, digits, '_' or '-'",
                MAX_POST_ID_LENGTH
            ),
        ))
    }
}

/// Trim comment content and check its length
pub fn validate_content(content: &str) -> Result<&str, SharedError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(SharedError::validation("content", "Comment cannot be empty"));
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(SharedError::validation(
            "content",
            format!("Comment must be at most {} characters", MAX_COMMENT_LENGTH),
        ));
    }
    Ok(content)
}
