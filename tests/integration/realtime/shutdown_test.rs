//! Graceful shutdown with open event streams
//!
//! Serves the app on a real socket, since in-process `oneshot` calls never
//! go through `axum::serve`.

use inkpress::backend::server::{create_app, ServerConfig};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn open_raw_stream(addr: std::net::SocketAddr, path: &str) -> TcpStream {
    let mut socket = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", path);
    socket.write_all(request.as_bytes()).await.unwrap();

    let mut buf = [0u8; 1024];
    let n = socket.read(&mut buf).await.unwrap();
    let head = String::from_utf8_lossy(&buf[..n]);
    assert!(head.starts_with("HTTP/1.1 200 OK"), "unexpected response: {}", head);
    socket
}

#[tokio::test]
async fn test_shutdown_completes_with_open_streams() {
    let (app, shutdown) = create_app(ServerConfig::default()).await;
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
                shutdown.run().await;
            })
            .await
    });

    let _notifications = open_raw_stream(addr, "/api/notifications/stream").await;
    let _comments = open_raw_stream(addr, "/api/posts/p1/comments/stream").await;

    stop_tx.send(()).unwrap();

    let finished = tokio::time::timeout(Duration::from_secs(3), server).await;
    assert!(
        matches!(finished, Ok(Ok(Ok(())))),
        "server did not finish after the stop signal"
    );
}
