/**
 * Delivery Capability
 *
 * The hub never knows what sits behind a subscriber. It only holds something
 * that can accept an event or report that it is gone. In production that is
 * the sending half of the channel feeding an SSE response; tests use plain
 * closures.
 *
 * # Contract
 *
 * - `deliver` must not block and must not call back into the hub
 * - an `Err` means the subscriber is gone for good; the hub drops it
 */

use crate::shared::RealtimeEvent;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// Reason a single delivery failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryFailure {
    /// The receiving side has been dropped
    #[error("subscriber channel closed")]
    Closed,
}

/// Something that can receive pushed events
pub trait Deliver: Send + 'static {
    /// Hand one event to the subscriber
    fn deliver(&self, event: RealtimeEvent) -> Result<(), DeliveryFailure>;
}

impl Deliver for UnboundedSender<RealtimeEvent> {
    fn deliver(&self, event: RealtimeEvent) -> Result<(), DeliveryFailure> {
        self.send(event).map_err(|_| DeliveryFailure::Closed)
    }
}

/// Closure-backed delivery, see [`deliver_fn`]
pub struct FnDeliver<F>(F);

impl<F> Deliver for FnDeliver<F>
where
    F: Fn(RealtimeEvent) -> Result<(), DeliveryFailure> + Send + 'static,
{
    fn deliver(&self, event: RealtimeEvent) -> Result<(), DeliveryFailure> {
        (self.0)(event)
    }
}

/// Wrap a closure as a delivery capability
///
/// # Example
///
/// ```rust
/// use inkpress::backend::realtime::{deliver_fn, NotificationHub};
///
/// let hub = NotificationHub::new();
/// let handle = hub.subscribe("post:1", deliver_fn(|event| {
///     println!("got {:?}", event.event_type);
///     Ok(())
/// }));
/// hub.unsubscribe(&handle);
/// ```
pub fn deliver_fn<F>(f: F) -> FnDeliver<F>
where
    F: Fn(RealtimeEvent) -> Result<(), DeliveryFailure> + Send + 'static,
{
    FnDeliver(f)
}
