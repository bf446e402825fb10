//! HTTP server module.
//!
//! Binds the configured address and serves the application router, with
//! graceful shutdown on SIGTERM/SIGINT including connection draining.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
