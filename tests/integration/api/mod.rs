//! API integration tests
//!
//! Integration tests for all API endpoints

mod notifications_test;
