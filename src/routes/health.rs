//! Health check endpoint for container orchestration.
//!
//! Provides a liveness/readiness probe that returns 200 OK whenever the process
//! can answer HTTP. Used by Kubernetes, ECS, systemd, and load balancers to
//! verify the service is alive. It checks no dependencies and cannot fail.

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Constant value of the `status` field.
pub const HEALTHY: &str = "healthy";

/// Probe response body, built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// ISO-8601, UTC, millisecond precision (`2026-10-16T09:30:12.345Z`)
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    /// Status captured at the current instant.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            status: HEALTHY,
            timestamp,
        }
    }
}

fn serialize_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Health check handler.
///
/// Ignores the request entirely and always answers `200 OK` with
/// `{"status":"healthy","timestamp":"..."}`.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::now()))
}
