//! Live stream integration tests

mod comment_stream_test;
mod notification_stream_test;
mod shutdown_test;
