//! SSE frame reader
//!
//! Reads `event:`/`data:` frames off a streaming response body. Comment
//! frames (keep-alives) are skipped.

use axum::body::BodyDataStream;
use axum::response::Response;
use futures_util::StreamExt;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

/// How long a test waits for a frame before failing
const FRAME_TIMEOUT: Duration = Duration::from_secs(2);

/// One parsed SSE frame
#[derive(Debug, Clone)]
pub struct SseFrame {
    pub event: String,
    pub data: Value,
}

/// Incremental reader over an SSE response
pub struct SseReader {
    body: BodyDataStream,
    buffer: String,
}

impl SseReader {
    pub fn new(response: Response) -> Self {
        Self {
            body: response.into_body().into_data_stream(),
            buffer: String::new(),
        }
    }

    /// Next frame, failing the test if none arrives in time
    pub async fn next_frame(&mut self) -> SseFrame {
        match timeout(FRAME_TIMEOUT, self.read_frame()).await {
            Ok(Some(frame)) => frame,
            Ok(None) => panic!("stream ended"),
            Err(_) => panic!("no SSE frame within {:?}", FRAME_TIMEOUT),
        }
    }

    /// Assert that nothing arrives within `wait`
    pub async fn expect_silence(&mut self, wait: Duration) {
        if let Ok(Some(frame)) = timeout(wait, self.read_frame()).await {
            panic!("unexpected SSE frame: {:?}", frame);
        }
    }

    async fn read_frame(&mut self) -> Option<SseFrame> {
        loop {
            while let Some(end) = self.buffer.find("\n\n") {
                let raw: String = self.buffer.drain(..end + 2).collect();
                if let Some(frame) = parse_frame(&raw) {
                    return Some(frame);
                }
            }

            let chunk = self.body.next().await?.ok()?;
            self.buffer.push_str(&String::from_utf8_lossy(&chunk));
        }
    }
}

fn parse_frame(raw: &str) -> Option<SseFrame> {
    let mut event = String::from("message");
    let mut data = String::new();

    for line in raw.lines() {
        if let Some(value) = line.strip_prefix("event:") {
            event = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("data:") {
            if !data.is_empty() {
                data.push('\n');
            }
            data.push_str(value.trim_start());
        }
    }

    if data.is_empty() {
        return None;
    }
    Some(SseFrame {
        event,
        data: serde_json::from_str(&data).expect("SSE data is not JSON"),
    })
}
