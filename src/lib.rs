//! Vigil: a standalone liveness and readiness probe.
//!
//! Serves `GET /api/health`, answering `{"status":"healthy","timestamp":"..."}`
//! with 200 OK for as long as the process can handle HTTP.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
