//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP listener (TLS terminates at the ingress or load balancer)
//! - Graceful shutdown on SIGTERM/SIGINT with connection draining

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
