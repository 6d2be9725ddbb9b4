//! Health check endpoints.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use telemetry::health;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub dataset_loaded: bool,
}

/// GET /health - Full health check.
pub async fn health_handler() -> Json<HealthResponse> {
    let report = health().report();
    Json(HealthResponse {
        status: format!("{:?}", report.status).to_lowercase(),
        dataset_loaded: health().dataset.is_healthy(),
    })
}

/// GET /health/ready - Readiness probe (snapshot loaded).
pub async fn ready_handler() -> StatusCode {
    if health().is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health/live - Liveness probe (service is running).
pub async fn live_handler() -> StatusCode {
    if health().is_alive() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
