//! System notification API integration tests

use crate::common::{create_test_user, TestApp};
use axum::http::StatusCode;
use inkpress::backend::realtime::GLOBAL_TOPIC;
use serde_json::json;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_send_reports_delivered_count() {
    let app = TestApp::new();
    let admin = create_test_user(&app, "admin").await;

    let (tx1, mut rx1) = mpsc::unbounded_channel();
    let (tx2, mut rx2) = mpsc::unbounded_channel();
    app.state.hub.subscribe_global(tx1);
    app.state.hub.subscribe_global(tx2);

    let (status, body) = app
        .post_json(
            "/api/notifications",
            json!({ "title": "Maintenance", "message": "Read-only at 22:00" }),
            Some(&admin.token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delivered"], 2);
    for rx in [&mut rx1, &mut rx2] {
        let event = rx.try_recv().unwrap();
        assert_eq!(event.payload["title"], "Maintenance");
        assert_eq!(event.payload["message"], "Read-only at 22:00");
    }
}

#[tokio::test]
async fn test_send_with_no_subscribers() {
    let app = TestApp::new();
    let admin = create_test_user(&app, "admin").await;

    let (status, body) = app
        .post_json(
            "/api/notifications",
            json!({ "title": "Hello", "message": "Nobody is listening" }),
            Some(&admin.token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delivered"], 0);
}

#[tokio::test]
async fn test_send_drops_closed_subscribers() {
    let app = TestApp::new();
    let admin = create_test_user(&app, "admin").await;

    let (tx, rx) = mpsc::unbounded_channel();
    app.state.hub.subscribe_global(tx);
    drop(rx);

    let (_, body) = app
        .post_json(
            "/api/notifications",
            json!({ "title": "Ping", "message": "Are you there?" }),
            Some(&admin.token),
        )
        .await;

    assert_eq!(body["delivered"], 0);
    assert_eq!(app.state.hub.subscriber_count(GLOBAL_TOPIC), 0);
}

#[tokio::test]
async fn test_send_validates_fields() {
    let app = TestApp::new();
    let admin = create_test_user(&app, "admin").await;

    let (status, _) = app
        .post_json(
            "/api/notifications",
            json!({ "title": " ", "message": "body" }),
            Some(&admin.token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post_json(
            "/api/notifications",
            json!({ "title": "Title", "message": "m".repeat(2001) }),
            Some(&admin.token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
