//! Authentication test helpers
//!
//! Provides utilities for creating test users through the API and minting
//! session tokens directly.

use axum::http::StatusCode;
use inkpress::backend::auth::sessions::create_token;
use serde_json::json;
use uuid::Uuid;

use super::app::{TestApp, TEST_JWT_SECRET};

/// Password given to every test user
pub const TEST_PASSWORD: &str = "password123";

/// Test user credentials
pub struct TestUser {
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Sign up `username` through the API
pub async fn create_test_user(app: &TestApp, username: &str) -> TestUser {
    let email = format!("{}@example.com", username);
    let (status, body) = app
        .post_json(
            "/api/auth/signup",
            json!({ "username": username, "email": email, "password": TEST_PASSWORD }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);

    TestUser {
        username: username.to_string(),
        email,
        token: body["token"].as_str().unwrap().to_string(),
    }
}

/// Session token for a user that was never registered
pub fn generate_test_token(username: &str) -> String {
    create_token(
        TEST_JWT_SECRET,
        Uuid::new_v4(),
        &format!("{}@example.com", username),
        username,
    )
    .expect("Failed to generate test token")
}
