//! In-process test application
//!
//! Builds the real router over fresh state and drives it with
//! `tower::ServiceExt::oneshot`, so no socket is bound.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use inkpress::backend::mail::{MailError, Mailer};
use inkpress::backend::routes::create_router;
use inkpress::backend::server::{AppState, ServerConfig};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

use super::sse::SseReader;

/// Session signing key used by the test app
pub const TEST_JWT_SECRET: &str = "inkpress-test-secret";

/// Base URL used in reset links
pub const TEST_PUBLIC_URL: &str = "http://blog.test";

/// One captured reset mail
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub link: String,
}

impl SentMail {
    /// Token carried by the reset link
    pub fn token(&self) -> String {
        self.link
            .split_once("token=")
            .map(|(_, token)| token.to_string())
            .expect("reset link has no token")
    }
}

/// Mailer that keeps every message in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
}

impl RecordingMailer {
    /// Mail captured so far
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }

    /// Wait until at least `count` mails were sent
    ///
    /// Reset mail goes out on a spawned task, so it can land after the
    /// response.
    pub async fn wait_for(&self, count: usize) -> Vec<SentMail> {
        for _ in 0..200 {
            let sent = self.sent();
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {} mails, got {}", count, self.sent().len());
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            link: reset_link.to_string(),
        });
        Ok(())
    }
}

/// Router plus direct handles to its state
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub mailer: RecordingMailer,
}

impl TestApp {
    pub fn new() -> Self {
        let config = ServerConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            public_url: TEST_PUBLIC_URL.to_string(),
            bcrypt_cost: 4,
            ..ServerConfig::default()
        };
        let mailer = RecordingMailer::default();
        let state = AppState::new(config, Arc::new(mailer.clone()));
        let router = create_router(state.clone());
        Self {
            state,
            router,
            mailer,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        into_json(self.send(request).await).await
    }

    pub async fn post_json(&self, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        into_json(self.send(request).await).await
    }

    /// Open an SSE stream; the subscription is registered when this returns
    pub async fn open_stream(&self, uri: &str) -> SseReader {
        let response = self
            .send(Request::get(uri).body(Body::empty()).unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/event-stream"), "got {}", content_type);
        SseReader::new(response)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

async fn into_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
