//! Notification stream integration tests

use crate::common::{create_test_user, TestApp};
use inkpress::backend::realtime::GLOBAL_TOPIC;
use inkpress::shared::RealtimeEvent;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_notification_reaches_open_streams() {
    let app = TestApp::new();
    let admin = create_test_user(&app, "admin").await;

    let mut first = app.open_stream("/api/notifications/stream").await;
    let mut second = app.open_stream("/api/notifications/stream").await;

    let (_, body) = app
        .post_json(
            "/api/notifications",
            json!({ "title": "Release", "message": "v2 is out" }),
            Some(&admin.token),
        )
        .await;
    assert_eq!(body["delivered"], 2);

    for stream in [&mut first, &mut second] {
        let frame = stream.next_frame().await;
        assert_eq!(frame.event, "notification");
        assert_eq!(frame.data["payload"]["title"], "Release");
        assert_eq!(frame.data["payload"]["message"], "v2 is out");
    }
}

#[tokio::test]
async fn test_notification_stream_has_no_snapshot() {
    let app = TestApp::new();
    app.state
        .hub
        .publish_global(RealtimeEvent::notification("Earlier", "before connect"));

    let mut stream = app.open_stream("/api/notifications/stream").await;

    stream.expect_silence(Duration::from_millis(100)).await;
}

#[tokio::test]
async fn test_comment_streams_do_not_see_notifications() {
    let app = TestApp::new();

    let mut comments = app.open_stream("/api/posts/p1/comments/stream").await;
    comments.next_frame().await;

    app.state
        .hub
        .publish_global(RealtimeEvent::notification("System", "only global"));

    comments.expect_silence(Duration::from_millis(100)).await;
}

#[tokio::test]
async fn test_closed_stream_leaves_global_topic() {
    let app = TestApp::new();

    let stream = app.open_stream("/api/notifications/stream").await;
    assert_eq!(app.state.hub.subscriber_count(GLOBAL_TOPIC), 1);

    drop(stream);
    assert_eq!(app.state.hub.subscriber_count(GLOBAL_TOPIC), 0);
}
