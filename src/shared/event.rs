/**
 * Push Events
 *
 * Events are the unit of delivery for the notification hub. A publisher
 * builds one event and the hub hands every subscriber of the topic its own
 * clone, so an event is never mutated after construction.
 *
 * # Event Types
 *
 * - `InitialState` - Snapshot sent to a new subscriber before any live event
 * - `NewComment` - A comment was added to a post
 * - `Notification` - System-wide notice on the global topic
 * - `Custom` - Anything else a caller wants to push
 *
 * # Wire Format
 *
 * Events serialize to JSON with a snake_case `event_type`:
 *
 * ```json
 * {"event_type":"new_comment","payload":{...},"timestamp":"2024-01-01T00:00:00+00:00"}
 * ```
 */
use serde::{Deserialize, Serialize};

use crate::shared::comment::Comment;

/// Type of push event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Snapshot delivered once, right after subscribing
    InitialState,
    /// New comment on a post
    NewComment,
    /// System notification
    Notification,
    /// Custom event type
    Custom(String),
}

impl EventType {
    /// Name used for the SSE `event:` field
    pub fn as_str(&self) -> &str {
        match self {
            EventType::InitialState => "initial_state",
            EventType::NewComment => "new_comment",
            EventType::Notification => "notification",
            EventType::Custom(name) => name.as_str(),
        }
    }
}

/// Event pushed to topic subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealtimeEvent {
    /// Type of event
    pub event_type: EventType,
    /// Event payload (JSON-serializable data)
    pub payload: serde_json::Value,
    /// RFC 3339 timestamp of construction
    pub timestamp: String,
}

impl RealtimeEvent {
    /// Create a new event stamped with the current time
    pub fn new(event_type: EventType, payload: serde_json::Value) -> Self {
        Self {
            event_type,
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Snapshot of a post's comments, sent as the first event of a comment stream
    pub fn initial_state(comments: &[Comment]) -> Self {
        Self::new(
            EventType::InitialState,
            serde_json::json!({ "comments": comments }),
        )
    }

    /// A single newly created comment
    pub fn new_comment(comment: &Comment) -> Self {
        Self::new(
            EventType::NewComment,
            serde_json::json!({ "comment": comment }),
        )
    }

    /// System notification with a title and body
    pub fn notification(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            EventType::Notification,
            serde_json::json!({
                "title": title.into(),
                "message": message.into(),
            }),
        )
    }
}
