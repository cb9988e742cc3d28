//! Shared Module
//!
//! Plain data types used on both sides of the HTTP boundary: the events
//! pushed over comment and notification streams, the comment record, and
//! the shared error type. Nothing here touches the runtime or the network.

/// Push event types
pub mod event;

/// Comment data structure
pub mod comment;

/// Shared error types
pub mod error;

pub use comment::Comment;
pub use error::SharedError;
pub use event::{EventType, RealtimeEvent};
