//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::model::Features;
use crate::satellite::WeatherReading;

// ============================================
// AUTH DTOs
// ============================================

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================
// SATELLITE DTOs
// ============================================

#[derive(Debug, Default, Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FetchResponse {
    pub firms_count: usize,
    pub weather_data: WeatherReading,
}

// ============================================
// PREDICTION DTOs
// ============================================

/// Prediction input. Browsers send unparseable numbers as `null`; missing
/// and null features count as zero.
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub rainfall: Option<f64>,
    #[serde(default)]
    pub ndvi: Option<f64>,
    #[serde(default)]
    pub historical_fire: Option<f64>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl PredictRequest {
    /// Features in model order
    pub fn features(&self) -> Features {
        [
            self.temperature,
            self.humidity,
            self.wind_speed,
            self.rainfall,
            self.ndvi,
            self.historical_fire,
        ]
        .map(|value| value.unwrap_or(0.0))
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: i64,
    pub risk_level: String,
    /// Percentage with two decimals, e.g. "91.00%"
    pub confidence: String,
    pub sms_status: Option<String>,
    pub telegram_status: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// "ready" or "not_configured"
    pub model: String,
    pub uptime_seconds: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_features_are_zero() {
        let req: PredictRequest = serde_json::from_str(
            r#"{"temperature": null, "humidity": 35, "wind_speed": 12.5, "ndvi": 0.4, "historical_fire": 1, "region": "Odisha"}"#,
        )
        .unwrap();

        assert_eq!(req.features(), [0.0, 35.0, 12.5, 0.0, 0.4, 1.0]);
        assert_eq!(req.region.as_deref(), Some("Odisha"));
        assert_eq!(req.phone_number, None);
    }

    #[test]
    fn test_verify_response_shape() {
        let ok = serde_json::to_value(VerifyResponse { success: true, error: None }).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true}));
    }
}
