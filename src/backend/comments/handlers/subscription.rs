/**
 * Comment Stream Handler
 *
 * GET /api/posts/{post_id}/comments/stream
 *
 * Opens an SSE stream on the post's topic. The first event is
 * `initial_state` with every comment stored so far; after that each new
 * comment arrives as a `new_comment` event. The snapshot is read and the
 * subscriber registered under the hub lock, so no comment is missed or
 * repeated between the two.
 *
 * # Example Response
 *
 * ```http
 * HTTP/1.1 200 OK
 * Content-Type: text/event-stream
 *
 * event: initial_state
 * data: {"event_type":"initial_state","payload":{"comments":[...]},"timestamp":"..."}
 *
 * event: new_comment
 * data: {"event_type":"new_comment","payload":{"comment":{...}},"timestamp":"..."}
 * ```
 */

use crate::backend::comments::validation::validate_post_id;
use crate::backend::error::BackendError;
use crate::backend::realtime::post_topic;
use crate::backend::realtime::subscription::{event_stream, SubscriptionGuard};
use crate::backend::server::state::AppState;
use crate::shared::RealtimeEvent;
use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use std::convert::Infallible;
use tokio::sync::mpsc;

/// Subscribe to the comments of a post
///
/// # Errors
///
/// * `400 Bad Request` - If the post ID is invalid
pub async fn handle_comment_subscription(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>, BackendError> {
    validate_post_id(&post_id)?;

    let (tx, rx) = mpsc::unbounded_channel();
    let comments = state.comments.clone();
    let snapshot_post = post_id.clone();

    let handle = state
        .hub
        .subscribe_with_snapshot(&post_topic(&post_id), tx, move || {
            RealtimeEvent::initial_state(&comments.list(&snapshot_post))
        })
        .ok_or_else(|| BackendError::state("Failed to deliver comment snapshot"))?;

    tracing::info!("[Comments] Subscriber {} watching {}", handle.id(), post_id);

    let guard = SubscriptionGuard::new(state.hub.clone(), handle);
    Ok(Sse::new(event_stream(rx, guard)).keep_alive(KeepAlive::default()))
}
