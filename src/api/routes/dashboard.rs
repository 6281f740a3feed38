//! Dashboard Routes
//!
//! - GET /api/dashboard_stats - Active hotspots and global risk
//! - GET /api/weather_trends - Weather history for the trend charts

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::monitor::{MonitorStats, TrendPoint};

/// GET /api/dashboard_stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<MonitorStats> {
    Json(state.monitor.stats().await)
}

/// GET /api/weather_trends
///
/// Oldest sample first.
pub async fn weather_trends(State(state): State<Arc<AppState>>) -> Json<Vec<TrendPoint>> {
    Json(state.monitor.trends().await)
}
