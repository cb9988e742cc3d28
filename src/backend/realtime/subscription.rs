/**
 * Server-Sent Events Subscriptions
 *
 * Glue between the notification hub and SSE responses. Each streaming
 * request gets an unbounded channel: the sender is registered in the hub,
 * the receiver drives the response body.
 *
 * # Teardown
 *
 * The stream owns a [`SubscriptionGuard`]. When axum drops the response body
 * (client closed the connection or a network error) the guard unsubscribes.
 * Since `Drop` runs once, the entry is removed exactly once on every path.
 * At server shutdown `NotificationHub::close_all` drops the senders instead,
 * which ends every stream and lets graceful shutdown complete.
 *
 * # Event Format
 *
 * ```text
 * event: notification
 * data: {"event_type":"notification","payload":{...},"timestamp":"..."}
 * ```
 */

use crate::backend::realtime::hub::{NotificationHub, SubscriptionHandle};
use crate::shared::RealtimeEvent;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use std::convert::Infallible;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Unsubscribes its handle when dropped
pub struct SubscriptionGuard {
    hub: NotificationHub,
    handle: SubscriptionHandle,
}

impl SubscriptionGuard {
    /// Take ownership of a live subscription
    pub fn new(hub: NotificationHub, handle: SubscriptionHandle) -> Self {
        Self { hub, handle }
    }

    /// The guarded subscription
    pub fn handle(&self) -> &SubscriptionHandle {
        &self.handle
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        tracing::debug!("[Realtime] Closing subscription on {}", self.handle.topic());
        self.hub.unsubscribe(&self.handle);
    }
}

/// Convert a hub event into an SSE frame named after its type
pub fn to_sse_event(event: &RealtimeEvent) -> Result<Event, serde_json::Error> {
    let data = serde_json::to_string(event)?;
    Ok(Event::default().event(event.event_type.as_str()).data(data))
}

/// Stream the events arriving on `rx` as SSE frames
///
/// The stream ends when the hub drops the sending half. Dropping the stream
/// drops `guard` and with it the subscription.
pub fn event_stream(
    rx: UnboundedReceiver<RealtimeEvent>,
    guard: SubscriptionGuard,
) -> impl tokio_stream::Stream<Item = Result<Event, Infallible>> + Send + 'static {
    stream::unfold((rx, guard), |(mut rx, guard)| async move {
        loop {
            let event = rx.recv().await?;
            match to_sse_event(&event) {
                Ok(frame) => return Some((Ok(frame), (rx, guard))),
                Err(e) => {
                    tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                    continue;
                }
            }
        }
    })
}

/// Subscribe to system notifications (GET /api/notifications/stream)
///
/// Registers the connection on the global topic and streams every
/// notification published after that point.
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// event: notification
/// data: {"event_type":"notification","payload":{"title":"...","message":"..."},"timestamp":"..."}
/// ```
pub async fn handle_realtime_subscription(
    State(hub): State<NotificationHub>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = hub.subscribe_global(tx);
    tracing::info!("[Realtime] Notification subscriber {} connected", handle.id());

    let guard = SubscriptionGuard::new(hub, handle);
    Sse::new(event_stream(rx, guard)).keep_alive(KeepAlive::default())
}
