//! Integration tests for the HTTP surface.
//!
//! Drives the real router with in-process requests via `tower::ServiceExt`,
//! no listening socket needed.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use greeter::config::CACHE_CONTROL_GREETING;
use greeter::routes::create_router;

async fn get(path: &str) -> axum::response::Response {
    create_router()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn greeting_returns_fixed_body() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );

    let body = body_bytes(response).await;
    assert_eq!(body, b"Hello from Jenkins Docker Dynamic Slave!");
}

#[tokio::test]
async fn greeting_sets_cache_control() {
    let response = get("/").await;

    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        CACHE_CONTROL_GREETING
    );
}

#[tokio::test]
async fn health_returns_ok() {
    let response = get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn health_is_not_cached() {
    let response = get("/health").await;

    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let first = body_bytes(get("/").await).await;
    let second = body_bytes(get("/").await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn post_to_greeting_is_method_not_allowed() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = get("/missing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
