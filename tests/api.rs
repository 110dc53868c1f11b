//! Integration tests driving the router directly, no real sockets.

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use futures::future::join_all;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use user_directory::api::create_router;

/// Issue a GET against a fresh router and return status plus raw body.
async fn get(path: &str) -> (StatusCode, Bytes) {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

#[tokio::test]
async fn health_returns_up_with_timestamp() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "UP");

    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(!timestamp.is_empty());
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .expect("timestamp should be valid RFC 3339");
}

#[tokio::test]
async fn health_timestamp_advances_between_calls() {
    let (_, first) = get("/health").await;
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let (_, second) = get("/health").await;

    let first: Value = serde_json::from_slice(&first).unwrap();
    let second: Value = serde_json::from_slice(&second).unwrap();

    assert_eq!(first["status"], second["status"]);
    assert_ne!(first["timestamp"], second["timestamp"]);
}

#[tokio::test]
async fn users_returns_fixed_dataset_in_order() {
    let (status, body) = get("/api/users").await;

    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"id": 1, "name": "John Doe", "email": "john@example.com"},
            {"id": 2, "name": "Jane Smith", "email": "jane@example.com"},
        ])
    );
}

#[tokio::test]
async fn users_responses_are_byte_identical() {
    let (_, first) = get("/api/users").await;

    for _ in 0..10 {
        let (status, body) = get("/api/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, first);
    }
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let (status, body) = get("/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn wrong_method_returns_404() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn users_survives_concurrent_load() {
    let app = create_router();

    let requests = (0..100).map(|_| {
        let app = app.clone();
        async move {
            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/api/users")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            let status = response.status();
            let body = response.into_body().collect().await.unwrap().to_bytes();
            (status, body)
        }
    });

    let results = join_all(requests).await;
    let (_, reference) = &results[0];

    for (status, body) in &results {
        assert_eq!(*status, StatusCode::OK);
        assert_eq!(body, reference);
    }
}
