//! Integration tests against the full router

pub mod api;
pub mod realtime;
