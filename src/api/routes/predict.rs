//! Prediction Routes
//!
//! - POST /predict - Classify wildfire risk and raise high risk alerts

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::alerts::AlertReport;
use crate::api::dto::{PredictRequest, PredictResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::model::RiskClass;

/// POST /predict
///
/// Updates the global risk label. A high risk result sends an SMS when a
/// phone number is given and always attempts a Telegram alert.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    let model = state.model.as_ref().ok_or(ApiError::ModelUnavailable)?;

    let output = model.predict(&req.features()).await?;
    let risk = RiskClass::from_code(output.prediction).ok_or_else(|| {
        ApiError::Internal(format!("Unknown risk class {}", output.prediction))
    })?;
    let confidence = output.confidence();

    state.monitor.set_risk(risk.label()).await;
    tracing::info!(risk = risk.label(), confidence, "Prediction complete");

    let alerts = if risk == RiskClass::High {
        state
            .alerts
            .high_risk(confidence, req.phone_number.as_deref(), req.region.as_deref())
            .await
    } else {
        AlertReport::default()
    };

    Ok(Json(PredictResponse {
        prediction: output.prediction,
        risk_level: risk.label().to_string(),
        confidence: format!("{:.2}%", confidence),
        sms_status: alerts.sms_status,
        telegram_status: alerts.telegram_status,
    }))
}
