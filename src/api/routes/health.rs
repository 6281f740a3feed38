//! Health Routes
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health - Status with model availability

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Reports "degraded" while no risk model is configured; everything else
/// has a simulated fallback.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, model) = if state.has_model() {
        ("healthy", "ready")
    } else {
        ("degraded", "not_configured")
    };

    Json(HealthResponse {
        status: status.to_string(),
        model: model.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
