//! Comments Module
//!
//! Post comments and their live streams.
//!
//! # Architecture
//!
//! - **`store`** - In-memory comment store
//! - **`validation`** - Input rules for post IDs and content
//! - **`handlers`** - List, create and stream endpoints
//!
//! # Module Structure
//!
//! ```text
//! comments/
//! ├── mod.rs          - Module exports and documentation
//! ├── store.rs        - Comment store
//! ├── validation.rs   - Input rules
//! └── handlers/
//!     ├── mod.rs          - Handler exports
//!     ├── list.rs         - GET comments
//!     ├── create.rs       - POST comment, publishes new_comment
//!     └── subscription.rs - SSE stream with initial snapshot
//! ```
//!
//! # Topics
//!
//! Comments of post `P` are published on topic `post:P`.

/// Comment store
pub mod store;

/// Input rules
pub mod validation;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_comment, handle_comment_subscription, list_comments};
pub use store::CommentStore;
