//! Comment stream integration tests
//!
//! Opens `/api/posts/{post_id}/comments/stream` through the router and reads
//! the SSE frames.

use crate::common::{generate_test_token, TestApp};
use inkpress::backend::realtime::post_topic;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_stream_starts_with_snapshot() {
    let app = TestApp::new();
    let token = generate_test_token("alice");
    for content in ["one", "two"] {
        app.post_json("/api/posts/p1/comments", json!({ "content": content }), Some(&token))
            .await;
    }

    let mut stream = app.open_stream("/api/posts/p1/comments/stream").await;
    let frame = stream.next_frame().await;

    assert_eq!(frame.event, "initial_state");
    assert_eq!(frame.data["event_type"], "initial_state");
    let contents: Vec<&str> = frame.data["payload"]["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["one", "two"]);
}

#[tokio::test]
async fn test_empty_post_snapshot() {
    let app = TestApp::new();

    let mut stream = app.open_stream("/api/posts/fresh/comments/stream").await;
    let frame = stream.next_frame().await;

    assert_eq!(frame.event, "initial_state");
    assert_eq!(frame.data["payload"]["comments"], json!([]));
}

#[tokio::test]
async fn test_new_comment_is_pushed_live() {
    let app = TestApp::new();
    let token = generate_test_token("bob");

    let mut stream = app.open_stream("/api/posts/p1/comments/stream").await;
    stream.next_frame().await;

    let (_, created) = app
        .post_json("/api/posts/p1/comments", json!({ "content": "live!" }), Some(&token))
        .await;

    let frame = stream.next_frame().await;
    assert_eq!(frame.event, "new_comment");
    assert_eq!(frame.data["payload"]["comment"]["id"], created["id"]);
    assert_eq!(frame.data["payload"]["comment"]["author"], "bob");
    assert_eq!(frame.data["payload"]["comment"]["content"], "live!");
}

#[tokio::test]
async fn test_posts_are_isolated() {
    let app = TestApp::new();
    let token = generate_test_token("bob");

    let mut p1 = app.open_stream("/api/posts/p1/comments/stream").await;
    let mut p2 = app.open_stream("/api/posts/p2/comments/stream").await;
    p1.next_frame().await;
    p2.next_frame().await;

    app.post_json("/api/posts/p2/comments", json!({ "content": "for p2" }), Some(&token))
        .await;

    let frame = p2.next_frame().await;
    assert_eq!(frame.data["payload"]["comment"]["content"], "for p2");
    p1.expect_silence(Duration::from_millis(100)).await;
}

#[tokio::test]
async fn test_every_subscriber_receives_each_comment_in_order() {
    let app = TestApp::new();
    let token = generate_test_token("bob");

    let mut first = app.open_stream("/api/posts/p1/comments/stream").await;
    let mut second = app.open_stream("/api/posts/p1/comments/stream").await;
    assert_eq!(app.state.hub.subscriber_count(&post_topic("p1")), 2);

    for content in ["a", "b", "c"] {
        app.post_json("/api/posts/p1/comments", json!({ "content": content }), Some(&token))
            .await;
    }

    for stream in [&mut first, &mut second] {
        assert_eq!(stream.next_frame().await.event, "initial_state");
        for expected in ["a", "b", "c"] {
            let frame = stream.next_frame().await;
            assert_eq!(frame.data["payload"]["comment"]["content"], expected);
        }
    }
}

#[tokio::test]
async fn test_closing_stream_unsubscribes() {
    let app = TestApp::new();
    let topic = post_topic("p1");

    let stream = app.open_stream("/api/posts/p1/comments/stream").await;
    assert_eq!(app.state.hub.subscriber_count(&topic), 1);

    drop(stream);
    assert_eq!(app.state.hub.subscriber_count(&topic), 0);
    assert_eq!(app.state.hub.topic_count(), 0);
}
