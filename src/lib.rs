//! Greeter: a minimal HTTP greeting service.
//!
//! Serves a fixed greeting at the site root and a liveness probe at
//! `/health`, with TOML configuration, structured logging, per-request
//! tracing spans, and graceful shutdown.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
