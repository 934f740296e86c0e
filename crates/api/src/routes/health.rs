//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Status reported while the process is able to serve requests.
pub const STATUS_UP: &str = "UP";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — liveness probe.
#[tracing::instrument]
pub async fn check() -> Json<HealthResponse> {
    metrics::counter!("http_requests_total", "route" => "/health").increment(1);
    Json(HealthResponse { status: STATUS_UP })
}
