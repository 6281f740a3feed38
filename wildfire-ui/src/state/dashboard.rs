//! Dashboard State
//!
//! `DashboardContext` owns every piece of mutable dashboard state: the three
//! chart widgets, stat labels, form inputs and workflow results. It is created
//! once when the page mounts and passed to the refresh/fetch/predict
//! workflows. Selectors below map server responses to display state and carry
//! no reactive dependencies.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{DashboardStats, FetchRequest, PredictionRequest, PredictionResult, WeatherData, WeatherTrendPoint};
use crate::charts::ChartHandle;
use crate::forms::{format_number, parse_float, parse_int};

use super::nav::NavState;

// ============ Selectors ============

/// Border state of the global risk card; exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBorder {
    Danger,
    Warning,
    Success,
}

impl RiskBorder {
    pub const ALL: [RiskBorder; 3] = [RiskBorder::Danger, RiskBorder::Warning, RiskBorder::Success];

    /// Select the border from the server's risk label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "High Risk" => RiskBorder::Danger,
            "Medium Risk" => RiskBorder::Warning,
            _ => RiskBorder::Success,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskBorder::Danger => "border-left-danger",
            RiskBorder::Warning => "border-left-warning",
            RiskBorder::Success => "border-left-success",
        }
    }
}

/// Risk class of the prediction result panel; exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionRisk {
    Low,
    Medium,
    High,
}

impl PredictionRisk {
    pub const ALL: [PredictionRisk; 3] = [PredictionRisk::Low, PredictionRisk::Medium, PredictionRisk::High];

    /// 0 is low, 1 is medium, any other code is high.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => PredictionRisk::Low,
            1 => PredictionRisk::Medium,
            _ => PredictionRisk::High,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PredictionRisk::Low => "risk-low",
            PredictionRisk::Medium => "risk-medium",
            PredictionRisk::High => "risk-high",
        }
    }
}

/// Chart series derived from the weather history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub temps: Vec<f64>,
    pub hums: Vec<f64>,
}

impl TrendSeries {
    pub fn from_points(points: &[WeatherTrendPoint]) -> Self {
        Self {
            labels: points.iter().map(|p| p.time.clone()).collect(),
            temps: points.iter().map(|p| p.temp).collect(),
            hums: points.iter().map(|p| p.hum).collect(),
        }
    }
}

/// Status line of the satellite fetch form
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus {
    #[default]
    Idle,
    InProgress,
    Found(u64),
    Failed(String),
}

impl FetchStatus {
    pub fn message(&self) -> String {
        match self {
            FetchStatus::Idle => String::new(),
            FetchStatus::InProgress => "Fetching satellite data...".to_string(),
            FetchStatus::Found(count) => format!("Found {} hotspots. State updated.", count),
            FetchStatus::Failed(error) => format!("Fetch failed: {}", error),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "",
            FetchStatus::InProgress => "text-info",
            FetchStatus::Found(_) => "text-success",
            FetchStatus::Failed(_) => "text-danger",
        }
    }
}

/// Rendered prediction result
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub risk_text: String,
    pub confidence_text: String,
    pub sms_status_text: String,
    pub telegram_status_text: String,
    pub risk: PredictionRisk,
}

impl PredictionView {
    pub fn from_result(result: &PredictionResult) -> Self {
        let confidence_text = match &result.confidence {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };

        Self {
            risk_text: result.risk_level.to_uppercase(),
            confidence_text,
            sms_status_text: status_text("SMS Alert: ", result.sms_status.as_deref()),
            telegram_status_text: status_text("Telegram: ", result.telegram_status.as_deref()),
            risk: PredictionRisk::from_code(result.prediction),
        }
    }
}

fn status_text(prefix: &str, status: Option<&str>) -> String {
    match status {
        Some(status) if !status.is_empty() => format!("{}{}", prefix, status),
        _ => String::new(),
    }
}

// ============ Forms ============

/// Inputs of the satellite fetch form
#[derive(Debug, Clone, Copy)]
pub struct FetchForm {
    pub region: RwSignal<String>,
    pub from_date: RwSignal<String>,
    pub to_date: RwSignal<String>,
}

impl FetchForm {
    fn new() -> Self {
        Self {
            region: create_rw_signal(String::new()),
            from_date: create_rw_signal(String::new()),
            to_date: create_rw_signal(String::new()),
        }
    }

    pub fn request(&self) -> FetchRequest {
        FetchRequest {
            region: self.region.get_untracked(),
            from_date: self.from_date.get_untracked(),
            to_date: self.to_date.get_untracked(),
        }
    }
}

/// Raw text inputs of the prediction form
#[derive(Debug, Clone, Copy)]
pub struct PredictionForm {
    pub temperature: RwSignal<String>,
    pub humidity: RwSignal<String>,
    pub wind_speed: RwSignal<String>,
    pub rainfall: RwSignal<String>,
    pub ndvi: RwSignal<String>,
    pub historical_fire: RwSignal<String>,
    pub phone_number: RwSignal<String>,
}

impl PredictionForm {
    fn new() -> Self {
        Self {
            temperature: create_rw_signal(String::new()),
            humidity: create_rw_signal(String::new()),
            wind_speed: create_rw_signal(String::new()),
            rainfall: create_rw_signal(String::new()),
            ndvi: create_rw_signal(String::new()),
            historical_fire: create_rw_signal("0".to_string()),
            phone_number: create_rw_signal(String::new()),
        }
    }

    /// Copy a weather observation into the five weather inputs.
    pub fn fill_weather(&self, weather: &WeatherData) {
        self.temperature.set(format_number(weather.temperature));
        self.humidity.set(format_number(weather.humidity));
        self.wind_speed.set(format_number(weather.wind_speed));
        self.rainfall.set(format_number(weather.rainfall));
        self.ndvi.set(format_number(weather.ndvi));
    }

    /// Assemble the prediction payload from the current inputs.
    pub fn request(&self, region: String) -> PredictionRequest {
        PredictionRequest {
            temperature: parse_float(&self.temperature.get_untracked()),
            humidity: parse_float(&self.humidity.get_untracked()),
            wind_speed: parse_float(&self.wind_speed.get_untracked()),
            rainfall: parse_float(&self.rainfall.get_untracked()),
            ndvi: parse_float(&self.ndvi.get_untracked()),
            historical_fire: parse_int(&self.historical_fire.get_untracked()),
            phone_number: self.phone_number.get_untracked(),
            region,
        }
    }
}

// ============ Refresh ordering ============

/// Issues increasing tokens to refresh cycles. A response is applied only
/// while its cycle's token is the latest one issued.
#[derive(Debug, Clone, Default)]
pub struct RefreshSequencer {
    latest: Rc<Cell<u64>>,
}

impl RefreshSequencer {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.get() == token
    }
}

// ============ Context ============

/// Owned dashboard page state
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub nav: RwSignal<NavState>,
    /// Sidebar collapsed marker on the page wrapper
    pub sidebar_toggled: RwSignal<bool>,
    /// Text of the active hotspot stat
    pub active_hotspots: RwSignal<String>,
    /// Text of the global risk stat
    pub risk_label: RwSignal<String>,
    pub risk_border: RwSignal<RiskBorder>,
    pub weather_chart: ChartHandle,
    pub risk_trend_chart: ChartHandle,
    pub importance_chart: ChartHandle,
    pub fetch_form: FetchForm,
    pub fetch_status: RwSignal<FetchStatus>,
    pub prediction_form: PredictionForm,
    /// `None` keeps the result panel hidden
    pub prediction: RwSignal<Option<PredictionView>>,
    pub sequencer: RefreshSequencer,
}

impl DashboardContext {
    /// Create the page state with empty charts.
    pub fn new() -> Self {
        Self {
            nav: create_rw_signal(NavState::default()),
            sidebar_toggled: create_rw_signal(false),
            active_hotspots: create_rw_signal("--".to_string()),
            risk_label: create_rw_signal("--".to_string()),
            risk_border: create_rw_signal(RiskBorder::Success),
            weather_chart: ChartHandle::weather(),
            risk_trend_chart: ChartHandle::risk_trend(),
            importance_chart: ChartHandle::importance(),
            fetch_form: FetchForm::new(),
            fetch_status: create_rw_signal(FetchStatus::Idle),
            prediction_form: PredictionForm::new(),
            prediction: create_rw_signal(None),
            sequencer: RefreshSequencer::default(),
        }
    }

    /// Update the stat labels and the risk card border.
    pub fn apply_stats(&self, stats: &DashboardStats) {
        self.active_hotspots.set(stats.active_hotspots.to_string());
        self.risk_label.set(stats.global_risk.clone());
        self.risk_border.set(RiskBorder::from_label(&stats.global_risk));
    }

    /// Feed the weather history to the line and bar charts.
    pub fn apply_trends(&self, points: &[WeatherTrendPoint]) {
        let series = TrendSeries::from_points(points);

        self.weather_chart.update(
            series.labels.clone(),
            vec![series.temps.clone(), series.hums],
        );
        // Temperature doubles as the risk trend proxy
        self.risk_trend_chart.update(series.labels, vec![series.temps]);
    }

    pub fn prediction_request(&self) -> PredictionRequest {
        self.prediction_form
            .request(self.fetch_form.region.get_untracked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(time: &str, temp: f64, hum: f64) -> WeatherTrendPoint {
        WeatherTrendPoint {
            time: time.to_string(),
            temp,
            hum,
        }
    }

    #[test]
    fn test_risk_border_from_label() {
        assert_eq!(RiskBorder::from_label("High Risk"), RiskBorder::Danger);
        assert_eq!(RiskBorder::from_label("Medium Risk"), RiskBorder::Warning);
        assert_eq!(RiskBorder::from_label("Low Risk"), RiskBorder::Success);
        assert_eq!(RiskBorder::from_label("high risk"), RiskBorder::Success);
        assert_eq!(RiskBorder::from_label(""), RiskBorder::Success);
    }

    #[test]
    fn test_prediction_risk_from_code() {
        assert_eq!(PredictionRisk::from_code(0), PredictionRisk::Low);
        assert_eq!(PredictionRisk::from_code(1), PredictionRisk::Medium);
        assert_eq!(PredictionRisk::from_code(2), PredictionRisk::High);
        assert_eq!(PredictionRisk::from_code(-1), PredictionRisk::High);
        assert_eq!(PredictionRisk::from_code(7), PredictionRisk::High);
    }

    #[test]
    fn test_trend_series_lengths_match() {
        let series = TrendSeries::from_points(&[
            point("10:00", 30.0, 40.0),
            point("11:00", 32.0, 38.0),
            point("12:00", 31.5, 39.0),
        ]);

        assert_eq!(series.labels.len(), 3);
        assert_eq!(series.temps.len(), 3);
        assert_eq!(series.hums.len(), 3);
        assert_eq!(series.hums[2], 39.0);
    }

    #[test]
    fn test_fetch_status_messages() {
        assert_eq!(FetchStatus::InProgress.message(), "Fetching satellite data...");
        assert_eq!(FetchStatus::Found(12).message(), "Found 12 hotspots. State updated.");
        assert_eq!(FetchStatus::Failed("Network error: offline".to_string()).message(), "Fetch failed: Network error: offline");
        assert_eq!(FetchStatus::Failed(String::new()).css_class(), "text-danger");
    }

    #[test]
    fn test_prediction_view_from_result() {
        let result = PredictionResult {
            risk_level: "high".to_string(),
            confidence: serde_json::json!(0.91),
            prediction: 2,
            sms_status: Some("Online SMS sent".to_string()),
            telegram_status: Some(String::new()),
        };

        let view = PredictionView::from_result(&result);
        assert_eq!(view.risk_text, "HIGH");
        assert_eq!(view.confidence_text, "0.91");
        assert_eq!(view.sms_status_text, "SMS Alert: Online SMS sent");
        assert_eq!(view.telegram_status_text, "");
        assert_eq!(view.risk, PredictionRisk::High);
    }

    #[test]
    fn test_sequencer_latest_token_wins() {
        let sequencer = RefreshSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();

        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_stats_scenario_high_risk() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();

        ctx.apply_stats(&DashboardStats {
            active_hotspots: 7,
            global_risk: "High Risk".to_string(),
        });

        assert_eq!(ctx.active_hotspots.get_untracked(), "7");
        assert_eq!(ctx.risk_label.get_untracked(), "High Risk");
        let border = ctx.risk_border.get_untracked();
        let applied: Vec<_> = RiskBorder::ALL.iter().filter(|b| **b == border).collect();
        assert_eq!(applied, vec![&RiskBorder::Danger]);

        runtime.dispose();
    }

    #[test]
    fn test_trends_scenario_fills_both_charts() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();

        ctx.apply_trends(&[point("10:00", 30.0, 40.0), point("11:00", 32.0, 38.0)]);

        let weather = ctx.weather_chart.snapshot();
        assert_eq!(weather.labels, vec!["10:00", "11:00"]);
        assert_eq!(weather.datasets[0].values, vec![30.0, 32.0]);
        assert_eq!(weather.datasets[1].values, vec![40.0, 38.0]);
        assert!(weather.is_aligned());

        let trend = ctx.risk_trend_chart.snapshot();
        assert_eq!(trend.labels, vec!["10:00", "11:00"]);
        assert_eq!(trend.datasets[0].values, vec![30.0, 32.0]);
        assert!(trend.is_aligned());

        // Shrinking history keeps labels and series in step
        ctx.apply_trends(&[point("12:00", 29.0, 45.0)]);
        let weather = ctx.weather_chart.snapshot();
        assert_eq!(weather.labels.len(), 1);
        assert!(weather.is_aligned());

        runtime.dispose();
    }

    #[test]
    fn test_weather_fill_and_request_parsing() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();

        ctx.fetch_form.region.set("Odisha".to_string());
        ctx.prediction_form.fill_weather(&WeatherData {
            temperature: 36.72,
            humidity: 18.0,
            wind_speed: 22.5,
            rainfall: 0.0,
            ndvi: 0.87,
        });
        assert_eq!(ctx.prediction_form.temperature.get_untracked(), "36.72");
        assert_eq!(ctx.prediction_form.rainfall.get_untracked(), "0");

        ctx.prediction_form.historical_fire.set("1".to_string());
        ctx.prediction_form.humidity.set("dry".to_string());
        ctx.prediction_form.phone_number.set("8591556205".to_string());

        let request = ctx.prediction_request();
        assert_eq!(request.temperature, 36.72);
        assert!(request.humidity.is_nan());
        assert_eq!(request.historical_fire, Some(1.0));
        assert_eq!(request.phone_number, "8591556205");
        assert_eq!(request.region, "Odisha");

        runtime.dispose();
    }
}
