//! Tests for the retry orchestration layer.
//!
//! The failing-endpoint test runs against a local stub server with paused
//! tokio time, so the 2+4+8+16 second backoff schedule elapses instantly.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use vasari_core::GenerationRequest;
use vasari_error::GeminiErrorKind;
use vasari_models::{GeminiClient, GeminiConfig, MAX_ATTEMPTS};

/// Serves `500 Internal Server Error` to every request, counting hits.
async fn spawn_failing_server() -> (String, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&hits);
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            counter.fetch_add(1, Ordering::SeqCst);

            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;

            let body = r#"{"error":{"message":"internal"}}"#;
            let response = format!(
                "HTTP/1.1 500 Internal Server Error\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", addr), hits)
}

fn test_client(endpoint: String) -> GeminiClient {
    let config = GeminiConfig::builder()
        .api_key("test-key")
        .endpoint(endpoint)
        .model("test-model")
        .build()
        .expect("valid config");
    GeminiClient::new(config).expect("client builds")
}

#[test]
fn backoff_schedule_doubles_from_two_seconds() {
    let delays: Vec<Duration> = GeminiClient::backoff_schedule().collect();
    assert_eq!(
        delays,
        vec![
            Duration::from_millis(2000),
            Duration::from_millis(4000),
            Duration::from_millis(8000),
            Duration::from_millis(16000),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn failing_endpoint_exhausts_exactly_five_attempts() {
    let (endpoint, hits) = spawn_failing_server().await;
    let client = test_client(endpoint);
    let request = GenerationRequest::new("q", "", false, false);

    let started = tokio::time::Instant::now();
    let err = client.generate(&request).await.expect_err("never succeeds");
    let elapsed = started.elapsed();

    match err.kind {
        GeminiErrorKind::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, MAX_ATTEMPTS);
            assert!(
                matches!(
                    *last,
                    GeminiErrorKind::HttpStatus { .. } | GeminiErrorKind::Network(_)
                ),
                "unexpected last cause: {last:?}"
            );
        }
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }

    // Cumulative backoff before attempts 2-5.
    assert!(
        elapsed >= Duration::from_secs(30),
        "expected at least 30s of backoff, got {elapsed:?}"
    );
    assert!(hits.load(Ordering::SeqCst) >= 1);
}

#[tokio::test(start_paused = true)]
async fn http_status_error_carries_provider_message() {
    let (endpoint, _hits) = spawn_failing_server().await;
    let client = test_client(endpoint);
    let request = GenerationRequest::new("q", "", false, false);

    let err = client.generate(&request).await.expect_err("never succeeds");

    if let GeminiErrorKind::RetriesExhausted { last, .. } = err.kind
        && let GeminiErrorKind::HttpStatus {
            status_code,
            message,
        } = *last
    {
        assert_eq!(status_code, 500);
        assert_eq!(message, "internal");
    }
}

#[tokio::test(start_paused = true)]
async fn unreachable_endpoint_fails_with_network_cause() {
    // Bind then drop so nothing listens on the port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let endpoint = format!("http://{}", listener.local_addr().expect("local addr"));
    drop(listener);

    let client = test_client(endpoint);
    let request = GenerationRequest::new("q", "", false, false);

    let err = client.generate(&request).await.expect_err("never connects");
    match err.kind {
        GeminiErrorKind::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, MAX_ATTEMPTS);
            assert!(matches!(*last, GeminiErrorKind::Network(_)));
        }
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }
}
