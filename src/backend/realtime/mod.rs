//! Real-time Push Module
//!
//! Topic-based push delivery for comment streams and system notifications.
//!
//! # Architecture
//!
//! The realtime module is organized into focused submodules:
//!
//! - **`hub`** - Topic registry with subscribe/unsubscribe/publish
//! - **`deliver`** - The capability a subscriber exposes to the hub
//! - **`subscription`** - SSE streams and the global notification stream
//! - **`broadcast`** - Handler that publishes system notifications
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── hub.rs          - Notification hub
//! ├── deliver.rs      - Delivery capability
//! ├── subscription.rs - SSE plumbing and subscription guard
//! └── broadcast.rs    - Send-notification handler
//! ```
//!
//! # Delivery Semantics
//!
//! Best-effort, at-most-once, no persistence. A subscriber that is not
//! connected when an event is published never sees it. A subscriber whose
//! channel is closed is removed the next time something is published to its
//! topic, or immediately when its stream is dropped.

/// Topic registry and fan-out
pub mod hub;

/// Delivery capability
pub mod deliver;

/// Server-Sent Events subscription plumbing
pub mod subscription;

/// System notification broadcast handler
pub mod broadcast;

pub use broadcast::send_notification;
pub use deliver::{deliver_fn, Deliver, DeliveryFailure};
pub use hub::{post_topic, NotificationHub, SubscriptionHandle, GLOBAL_TOPIC};
pub use subscription::{handle_realtime_subscription, SubscriptionGuard};
