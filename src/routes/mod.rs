//! HTTP route handlers for the greeting service.
//!
//! Routes are organized by content type, with per-route Cache-Control headers.
//! The greeting never changes at runtime and gets a public cache duration,
//! while the health endpoint is left uncached so liveness probes always see
//! a fresh response.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_GREETING;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
///
/// Requests that match no route get axum's default `404 Not Found`; a
/// matched path with the wrong method gets `405 Method Not Allowed`.
pub fn create_router() -> Router {
    // Greeting - static content, safe for upstream caches
    let home_routes = Router::new().route("/", get(home::greeting)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_GREETING),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
