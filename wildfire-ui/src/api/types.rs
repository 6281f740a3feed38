//! Request and Response Types
//!
//! JSON shapes exchanged with the WildFire server.

use serde::{Deserialize, Serialize};

/// Summary shown in the dashboard stat cards
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardStats {
    pub active_hotspots: u64,
    /// "High Risk", "Medium Risk" or "Low Risk"
    pub global_risk: String,
}

/// One sample of the weather history
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherTrendPoint {
    /// Display label, e.g. "14:00"
    pub time: String,
    pub temp: f64,
    pub hum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchRequest {
    pub region: String,
    pub from_date: String,
    pub to_date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FetchResult {
    pub firms_count: u64,
    pub weather_data: WeatherData,
}

/// Weather observation used as prediction input
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherData {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub rainfall: f64,
    pub ndvi: f64,
}

/// Prediction payload. Numeric fields are sent as parsed; a NaN float or an
/// unparseable integer is encoded as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub rainfall: f64,
    pub ndvi: f64,
    pub historical_fire: Option<f64>,
    pub phone_number: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub risk_level: String,
    /// Displayed verbatim; the server sends a string like "91.00%" but any
    /// JSON scalar is accepted.
    pub confidence: serde_json::Value,
    /// 0 = low, 1 = medium, anything else = high
    pub prediction: i64,
    #[serde(default)]
    pub sms_status: Option<String>,
    #[serde(default)]
    pub telegram_status: Option<String>,
}
