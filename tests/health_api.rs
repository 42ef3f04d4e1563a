//! Integration tests for the probe endpoint, driven through the full router
//! (middleware and fallback included) without binding a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chrono::{DateTime, Utc};
use tower::ServiceExt;

async fn send(method: Method, uri: &str) -> axum::response::Response {
    vigil::create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn parse_timestamp(json: &serde_json::Value) -> DateTime<Utc> {
    let raw = json["timestamp"].as_str().expect("timestamp is a string");
    DateTime::parse_from_rfc3339(raw)
        .expect("timestamp is ISO-8601")
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_health_check() {
    let response = send(Method::GET, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json.as_object().unwrap().len(), 2);
    parse_timestamp(&json);
}

#[tokio::test]
async fn test_timestamp_format() {
    let json = json_body(send(Method::GET, "/api/health").await).await;
    let raw = json["timestamp"].as_str().unwrap();

    // YYYY-MM-DDTHH:MM:SS.mmmZ
    assert_eq!(raw.len(), 24);
    assert!(raw.ends_with('Z'));
    assert_eq!(&raw[19..20], ".");
    assert!(raw[20..23].chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_timestamp_is_current() {
    let before = Utc::now();
    let json = json_body(send(Method::GET, "/api/health").await).await;
    let after = Utc::now();

    let ts = parse_timestamp(&json);
    // Serialization truncates to milliseconds
    assert!(ts >= before - chrono::Duration::milliseconds(1));
    assert!(ts <= after);
}

#[tokio::test]
async fn test_sequential_timestamps_non_decreasing() {
    let mut previous = parse_timestamp(&json_body(send(Method::GET, "/api/health").await).await);
    for _ in 0..10 {
        let next = parse_timestamp(&json_body(send(Method::GET, "/api/health").await).await);
        assert!(next >= previous);
        previous = next;
    }
}

#[tokio::test]
async fn test_concurrent_requests_all_healthy() {
    let handles: Vec<_> = (0..16)
        .map(|_| tokio::spawn(async { send(Method::GET, "/api/health").await }))
        .collect();

    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }
}

#[tokio::test]
async fn test_request_id_header() {
    let first = send(Method::GET, "/api/health").await;
    let second = send(Method::GET, "/api/health").await;

    let first_id = first.headers()["x-request-id"].to_str().unwrap().to_string();
    let second_id = second.headers()["x-request-id"].to_str().unwrap().to_string();

    assert_eq!(first_id.len(), 36);
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn test_other_methods_not_allowed() {
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = send(method, "/api/health").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[tokio::test]
async fn test_query_string_ignored() {
    let response = send(Method::GET, "/api/health?verbose=true").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let response = send(Method::GET, "/health").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-request-id"));

    let json = json_body(response).await;
    assert_eq!(json["error"], "Not found: /health");
}
