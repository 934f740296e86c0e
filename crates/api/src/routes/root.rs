//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

/// Greeting returned by the root endpoint.
pub const GREETING: &str = "Healthletic Backend API is running!";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / — confirms the API is running.
#[tracing::instrument]
pub async fn index() -> Json<RootResponse> {
    metrics::counter!("http_requests_total", "route" => "/").increment(1);
    Json(RootResponse { message: GREETING })
}
