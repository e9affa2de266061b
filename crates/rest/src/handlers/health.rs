//! Health check endpoint handlers.
//!
//! Provide simple health check endpoints for monitoring and load balancers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::Value;
use tracing::debug;

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Returns a simple health status, useful for load balancers and
/// monitoring systems. The directory is loaded once at startup, so a
/// serving process is always healthy; the payload reports how much data
/// it is serving.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    debug!("processing health check request");

    let directory = state.directory();

    Json(serde_json::json!({
        "status": "healthy",
        "doctors": directory.len(),
        "loaded_at": directory.loaded_at().map(|t| t.to_rfc3339()),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handler for a liveness probe.
///
/// This could be used by Kubernetes liveness probes.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for a readiness probe.
///
/// Reports whether the dataset fetch at startup produced any doctors. An
/// empty directory still serves (degraded, every listing empty) so this
/// stays `200 OK` either way and the check value tells operators which
/// state they are in.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
pub async fn readiness_handler(State(state): State<AppState>) -> Json<Value> {
    debug!("processing readiness check request");

    let directory_check = if state.directory().is_empty() {
        "empty"
    } else {
        "loaded"
    };

    Json(serde_json::json!({
        "status": "ready",
        "checks": {
            "directory": directory_check
        }
    }))
}
