//! HTTP round trips against a throwaway local responder.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use satya_core::config::ServiceConfig;
use satya_core::traits::IVerificationService;
use satya_core::ServiceOutcome;
use satya_transport::HttpClient;

// ─── Helpers ───────────────────────────────────────────────

/// Serve exactly one HTTP response, returning the raw request it received.
async fn serve_once(status_line: &'static str, body: Vec<u8>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        socket.shutdown().await.ok();
        request
    });
    (format!("http://{addr}"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn client_for(base_url: String) -> HttpClient {
    HttpClient::new(ServiceConfig {
        base_url,
        ..Default::default()
    })
    .unwrap()
}

// ─── Tests ─────────────────────────────────────────────────

#[tokio::test]
async fn success_body_becomes_record() {
    let body = test_fixtures::load_body(test_fixtures::WATER_BOILS_TRUSTED);
    let (base, server) = serve_once("200 OK", body).await;

    let outcome = client_for(base).verify("Water boils at 100C at sea level").await;
    let request = server.await.unwrap();

    let raw = test_fixtures::load_value(test_fixtures::WATER_BOILS_TRUSTED);
    match outcome {
        ServiceOutcome::Success(record) => {
            assert_eq!(record.block_index(), 3);
            assert_eq!(record.trust_score(), 95.0);
            assert_eq!(record.block_hash(), raw["blockchain_record"]["hash"]);
            assert_eq!(
                record.blockchain_record.previous_hash.as_deref(),
                raw["blockchain_record"]["previous_hash"].as_str()
            );
        }
        other => panic!("expected success, got {other:?}"),
    }

    assert!(request.starts_with("POST /verify_and_log HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    let body_start = request.find("\r\n\r\n").unwrap() + 4;
    let sent: serde_json::Value = serde_json::from_str(&request[body_start..]).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({ "claim": "Water boils at 100C at sea level" })
    );
}

#[tokio::test]
async fn detail_on_server_error_is_logical_error() {
    let body = test_fixtures::load_body(test_fixtures::RATE_LIMIT_DETAIL);
    let (base, server) = serve_once("500 Internal Server Error", body).await;

    let outcome = client_for(base).verify("anything").await;
    server.await.unwrap();

    assert_eq!(outcome, ServiceOutcome::logical("Rate limit exceeded"));
}

#[tokio::test]
async fn non_json_gateway_page_is_transport_error() {
    let (base, server) = serve_once("502 Bad Gateway", b"<html>bad gateway</html>".to_vec()).await;

    let outcome = client_for(base).verify("anything").await;
    server.await.unwrap();

    assert!(matches!(outcome, ServiceOutcome::TransportError { .. }));
}

#[tokio::test]
async fn malformed_success_is_transport_error() {
    let body = test_fixtures::load_body(test_fixtures::MALFORMED_SUCCESS);
    let (base, server) = serve_once("200 OK", body).await;

    let outcome = client_for(base).verify("anything").await;
    server.await.unwrap();

    assert!(matches!(outcome, ServiceOutcome::TransportError { .. }));
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = client_for(format!("http://{addr}")).verify("anything").await;
    assert!(matches!(outcome, ServiceOutcome::TransportError { .. }));
}

#[tokio::test]
async fn configured_timeout_bounds_a_silent_service() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let client = HttpClient::new(ServiceConfig {
        base_url: format!("http://{addr}"),
        request_timeout_secs: Some(1),
        ..Default::default()
    })
    .unwrap();

    let outcome = client.verify("anything").await;
    assert!(matches!(outcome, ServiceOutcome::TransportError { .. }));
    server.abort();
}
