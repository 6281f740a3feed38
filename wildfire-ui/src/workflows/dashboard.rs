//! Dashboard Workflows
//!
//! Refresh, satellite fetch and prediction against a `DashboardBackend`.

use leptos::{spawn_local, SignalSet};

use crate::api::{ClientError, DashboardBackend};
use crate::state::{DashboardContext, FetchStatus, PredictionView};

/// Start a refresh without waiting for it. Used by the timer and the
/// navigation triggers.
pub fn spawn_refresh<B>(ctx: DashboardContext, backend: B)
where
    B: DashboardBackend + 'static,
{
    spawn_local(async move {
        refresh_dashboard(&ctx, &backend).await;
    });
}

/// Reload stats and weather history into the page.
///
/// Failures are logged and otherwise ignored; the next trigger retries.
/// Responses of a refresh that has since been superseded are dropped.
pub async fn refresh_dashboard<B>(ctx: &DashboardContext, backend: &B)
where
    B: DashboardBackend + ?Sized,
{
    let token = ctx.sequencer.issue();

    if let Err(e) = refresh_with_token(ctx, backend, token).await {
        tracing::error!("Dashboard refresh failed: {}", e);
    }
}

async fn refresh_with_token<B>(
    ctx: &DashboardContext,
    backend: &B,
    token: u64,
) -> Result<(), ClientError>
where
    B: DashboardBackend + ?Sized,
{
    let stats = backend.dashboard_stats().await?;
    if !ctx.sequencer.is_current(token) {
        tracing::debug!(token, "Discarding stale dashboard stats");
        return Ok(());
    }
    ctx.apply_stats(&stats);

    let trends = backend.weather_trends().await?;
    if !ctx.sequencer.is_current(token) {
        tracing::debug!(token, "Discarding stale weather trends");
        return Ok(());
    }
    ctx.apply_trends(&trends);

    Ok(())
}

/// Fetch satellite and weather data for the form's region, copy the
/// weather into the prediction form, then refresh.
pub async fn fetch_satellite_data<B>(ctx: &DashboardContext, backend: &B)
where
    B: DashboardBackend + ?Sized,
{
    ctx.fetch_status.set(FetchStatus::InProgress);

    let request = ctx.fetch_form.request();
    tracing::info!(region = %request.region, "Fetching satellite data");

    match backend.fetch_satellite_data(&request).await {
        Ok(result) => {
            ctx.fetch_status.set(FetchStatus::Found(result.firms_count));
            ctx.prediction_form.fill_weather(&result.weather_data);
            refresh_dashboard(ctx, backend).await;
        }
        Err(e) => {
            tracing::warn!("Satellite fetch failed: {}", e);
            ctx.fetch_status.set(FetchStatus::Failed(e.to_string()));
        }
    }
}

/// Submit the prediction form and show the result panel.
///
/// The error is returned to the caller, which alerts the user.
pub async fn run_prediction<B>(ctx: &DashboardContext, backend: &B) -> Result<(), ClientError>
where
    B: DashboardBackend + ?Sized,
{
    let request = ctx.prediction_request();
    let result = backend.predict(&request).await?;

    tracing::info!(prediction = result.prediction, risk = %result.risk_level, "Prediction received");
    ctx.prediction.set(Some(PredictionView::from_result(&result)));

    refresh_dashboard(ctx, backend).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        DashboardStats, FetchRequest, FetchResult, PredictionRequest, PredictionResult,
        WeatherData, WeatherTrendPoint,
    };
    use crate::state::dashboard::RefreshSequencer;
    use crate::state::{PredictionRisk, RiskBorder};
    use async_trait::async_trait;
    use leptos::*;
    use std::cell::{Cell, RefCell};

    struct FakeBackend {
        stats: Result<DashboardStats, ClientError>,
        trends: Vec<WeatherTrendPoint>,
        fetch: Result<FetchResult, ClientError>,
        predict: Result<PredictionResult, ClientError>,
        stats_calls: Cell<usize>,
        last_prediction: RefCell<Option<PredictionRequest>>,
        /// Issues a newer token while the stats request is in flight
        interloper: Option<RefreshSequencer>,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                stats: Ok(DashboardStats {
                    active_hotspots: 7,
                    global_risk: "High Risk".to_string(),
                }),
                trends: vec![
                    WeatherTrendPoint { time: "10:00".to_string(), temp: 30.0, hum: 40.0 },
                    WeatherTrendPoint { time: "11:00".to_string(), temp: 32.0, hum: 38.0 },
                ],
                fetch: Ok(FetchResult {
                    firms_count: 23,
                    weather_data: WeatherData {
                        temperature: 41.5,
                        humidity: 12.0,
                        wind_speed: 28.8,
                        rainfall: 0.0,
                        ndvi: 0.92,
                    },
                }),
                predict: Ok(PredictionResult {
                    risk_level: "high".to_string(),
                    confidence: serde_json::json!(0.91),
                    prediction: 2,
                    sms_status: None,
                    telegram_status: None,
                }),
                stats_calls: Cell::new(0),
                last_prediction: RefCell::new(None),
                interloper: None,
            }
        }
    }

    #[async_trait(?Send)]
    impl DashboardBackend for FakeBackend {
        async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
            self.stats_calls.set(self.stats_calls.get() + 1);
            if let Some(sequencer) = &self.interloper {
                sequencer.issue();
            }
            self.stats.clone()
        }

        async fn weather_trends(&self) -> Result<Vec<WeatherTrendPoint>, ClientError> {
            Ok(self.trends.clone())
        }

        async fn fetch_satellite_data(&self, _request: &FetchRequest) -> Result<FetchResult, ClientError> {
            self.fetch.clone()
        }

        async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ClientError> {
            *self.last_prediction.borrow_mut() = Some(request.clone());
            self.predict.clone()
        }
    }

    #[tokio::test]
    async fn test_refresh_updates_stats_and_charts() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();
        let backend = FakeBackend::new();

        refresh_dashboard(&ctx, &backend).await;

        assert_eq!(ctx.active_hotspots.get_untracked(), "7");
        assert_eq!(ctx.risk_border.get_untracked(), RiskBorder::Danger);
        assert_eq!(ctx.weather_chart.snapshot().labels, vec!["10:00", "11:00"]);
        assert_eq!(ctx.risk_trend_chart.snapshot().datasets[0].values, vec![30.0, 32.0]);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_refresh_failure_leaves_page_untouched() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();
        let mut backend = FakeBackend::new();
        backend.stats = Err(ClientError::Parse("expected value".to_string()));

        refresh_dashboard(&ctx, &backend).await;

        assert_eq!(ctx.active_hotspots.get_untracked(), "--");
        assert!(ctx.weather_chart.snapshot().labels.is_empty());

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_superseded_refresh_is_discarded() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();
        let mut backend = FakeBackend::new();
        backend.interloper = Some(ctx.sequencer.clone());

        refresh_dashboard(&ctx, &backend).await;

        assert_eq!(ctx.active_hotspots.get_untracked(), "--");
        assert_eq!(ctx.risk_border.get_untracked(), RiskBorder::Success);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_fetch_fills_prediction_form_and_refreshes() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();
        let backend = FakeBackend::new();

        fetch_satellite_data(&ctx, &backend).await;

        assert_eq!(ctx.fetch_status.get_untracked(), FetchStatus::Found(23));
        assert_eq!(ctx.prediction_form.temperature.get_untracked(), "41.5");
        assert_eq!(ctx.prediction_form.ndvi.get_untracked(), "0.92");
        assert_eq!(backend.stats_calls.get(), 1);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_fetch_failure_reports_error() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();
        let mut backend = FakeBackend::new();
        backend.fetch = Err(ClientError::Network("Failed to fetch".to_string()));

        fetch_satellite_data(&ctx, &backend).await;

        assert_eq!(
            ctx.fetch_status.get_untracked().message(),
            "Fetch failed: Network error: Failed to fetch"
        );
        assert_eq!(backend.stats_calls.get(), 0);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_prediction_shows_high_risk_panel() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();
        let backend = FakeBackend::new();
        ctx.prediction_form.temperature.set("44".to_string());
        ctx.prediction_form.wind_speed.set("gusty".to_string());

        run_prediction(&ctx, &backend).await.unwrap();

        let view = ctx.prediction.get_untracked().unwrap();
        assert_eq!(view.risk_text, "HIGH");
        let applied: Vec<_> = PredictionRisk::ALL.iter().filter(|r| **r == view.risk).collect();
        assert_eq!(applied, vec![&PredictionRisk::High]);

        let sent = backend.last_prediction.borrow().clone().unwrap();
        assert_eq!(sent.temperature, 44.0);
        assert!(sent.wind_speed.is_nan());
        assert_eq!(sent.historical_fire, Some(0.0));
        assert_eq!(backend.stats_calls.get(), 1);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_prediction_failure_keeps_panel_hidden() {
        let runtime = create_runtime();
        let ctx = DashboardContext::new();
        let mut backend = FakeBackend::new();
        backend.predict = Err(ClientError::Status {
            status: 500,
            message: "Model not trained yet".to_string(),
        });

        let err = run_prediction(&ctx, &backend).await.unwrap_err();

        assert_eq!(err.to_string(), "Server error (500): Model not trained yet");
        assert!(ctx.prediction.get_untracked().is_none());

        runtime.dispose();
    }
}
