//! Satellite Routes
//!
//! - POST /fetch_satellite_data - Pull hotspots and weather for a region

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{FetchRequest, FetchResponse};
use crate::api::state::AppState;

/// POST /fetch_satellite_data
///
/// Records the hotspot count and appends the weather reading to the trend
/// history.
pub async fn fetch_satellite_data(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FetchRequest>,
) -> Json<FetchResponse> {
    let region = req.region.unwrap_or_default();
    let from_date = req.from_date.unwrap_or_default();
    let to_date = req.to_date.unwrap_or_default();

    let (hotspots, weather) = tokio::join!(
        state.satellite.hotspots(&region, &from_date, &to_date),
        state.satellite.weather(&region),
    );

    state
        .monitor
        .record_fetch(hotspots.len() as u64, &weather)
        .await;

    tracing::info!(
        region = %region,
        hotspots = hotspots.len(),
        temperature = weather.temperature,
        "Satellite data updated"
    );

    Json(FetchResponse {
        firms_count: hotspots.len(),
        weather_data: weather,
    })
}
