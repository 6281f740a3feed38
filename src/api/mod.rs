//! WildFire HTTP API
//!
//! Page shell, session and data endpoints, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Login page, clears any session
//! - `GET /dashboard` - Dashboard, requires a session
//! - `GET /logout` - Clears the session
//!
//! ## Auth
//! - `POST /api/auth/verify` - Exchange an ID token for a session
//!
//! ## Dashboard
//! - `GET /api/dashboard_stats` - Active hotspots and global risk
//! - `GET /api/weather_trends` - Weather history
//! - `POST /fetch_satellite_data` - Pull hotspots and weather
//! - `POST /predict` - Risk prediction with alerts
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health` - Status with model availability
//!
//! Anything else is served from the static directory (the compiled
//! browser bundle).

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::pages::index))
        .route("/dashboard", get(routes::pages::dashboard))
        .route("/logout", get(routes::pages::logout));

    let api_routes = Router::new()
        .route("/auth/verify", post(routes::auth::verify))
        .route("/dashboard_stats", get(routes::dashboard::stats))
        .route("/weather_trends", get(routes::dashboard::weather_trends));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let static_files = ServeDir::new(&state.config.server.static_dir);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        .route(
            "/fetch_satellite_data",
            post(routes::satellite::fetch_satellite_data),
        )
        .route("/predict", post(routes::predict::predict))
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("WildFire server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("WildFire server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::{Features, ModelError, ModelOutput, RiskModel};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    struct FixedModel {
        prediction: i64,
        probabilities: Vec<f64>,
    }

    #[async_trait]
    impl RiskModel for FixedModel {
        async fn predict(&self, _features: &Features) -> Result<ModelOutput, ModelError> {
            Ok(ModelOutput {
                prediction: self.prediction,
                probabilities: self.probabilities.clone(),
            })
        }
    }

    fn test_state() -> AppState {
        AppState::new(Config::default()).unwrap()
    }

    fn with_fixed_model(prediction: i64, probabilities: Vec<f64>) -> AppState {
        test_state().with_model(Arc::new(FixedModel {
            prediction,
            probabilities,
        }))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = build_router(test_state());
        let response = app.oneshot(get("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_reports_missing_model() {
        let app = build_router(test_state());
        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["model"], "not_configured");
    }

    #[tokio::test]
    async fn test_dashboard_stats_initial() {
        let app = build_router(test_state());
        let response = app.oneshot(get("/api/dashboard_stats")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["active_hotspots"], 0);
        assert_eq!(body["global_risk"], "Low Risk");
    }

    #[tokio::test]
    async fn test_weather_trends_seeded() {
        let app = build_router(test_state());
        let response = app.oneshot(get("/api/weather_trends")).await.unwrap();

        let body = json_body(response).await;
        let points = body.as_array().unwrap();
        assert_eq!(points.len(), 10);
        assert!(points[0]["time"].is_string());
        assert!(points[0]["temp"].is_number());
        assert!(points[0]["hum"].is_number());
    }

    #[tokio::test]
    async fn test_fetch_updates_stats_and_trends() {
        let state = test_state();
        let app = build_router(state.clone());

        let response = app
            .clone()
            .oneshot(post_json(
                "/fetch_satellite_data",
                r#"{"region": "Odisha", "from_date": "2024-04-01", "to_date": "2024-04-02"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let count = body["firms_count"].as_u64().unwrap();
        assert!((5..=50).contains(&count));
        assert!(body["weather_data"]["ndvi"].is_number());

        let stats = state.monitor.stats().await;
        assert_eq!(stats.active_hotspots, count);
        assert_eq!(state.monitor.trends().await.len(), 11);
    }

    #[tokio::test]
    async fn test_predict_without_model() {
        let app = build_router(test_state());
        let response = app
            .oneshot(post_json("/predict", r#"{"temperature": 30}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Model not trained yet");
    }

    #[tokio::test]
    async fn test_predict_low_risk_sends_no_alerts() {
        let state = with_fixed_model(0, vec![0.875, 0.1, 0.025]);
        let app = build_router(state.clone());

        let response = app
            .oneshot(post_json(
                "/predict",
                r#"{"temperature": 22, "humidity": 60, "phone_number": "9876543210", "region": "Kerala"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["prediction"], 0);
        assert_eq!(body["risk_level"], "Low Risk");
        assert_eq!(body["confidence"], "87.50%");
        assert!(body["sms_status"].is_null());
        assert!(body["telegram_status"].is_null());
    }

    #[tokio::test]
    async fn test_predict_high_risk_alerts_and_updates_risk() {
        let state = with_fixed_model(2, vec![0.05, 0.2, 0.75]);
        let app = build_router(state.clone());

        let response = app
            .oneshot(post_json(
                "/predict",
                r#"{"temperature": 44, "humidity": 9, "wind_speed": null, "phone_number": "9876543210", "region": "Uttarakhand"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["risk_level"], "High Risk");
        assert_eq!(body["confidence"], "75.00%");
        assert_eq!(body["sms_status"], "Simulated GSM SMS");
        assert_eq!(body["telegram_status"], "Telegram Config Missing");

        assert_eq!(state.monitor.stats().await.global_risk, "High Risk");
    }

    #[tokio::test]
    async fn test_verify_without_token() {
        let app = build_router(test_state());
        let response = app
            .oneshot(post_json("/api/auth/verify", r#"{"token": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body, serde_json::json!({"success": false, "error": "No token provided"}));
    }

    #[tokio::test]
    async fn test_session_gates_dashboard() {
        let app = build_router(test_state());

        // No session: redirected to login
        let response = app.clone().oneshot(get("/dashboard")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        // Verify opens a session
        let response = app
            .clone()
            .oneshot(post_json("/api/auth/verify", r#"{"token": "id-token"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let dashboard = |cookie: &str| {
            Request::builder()
                .uri("/dashboard")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap()
        };

        let response = app.clone().oneshot(dashboard(cookie.as_str())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Logout ends it
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/logout")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app.oneshot(dashboard(cookie.as_str())).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_login_page_clears_session() {
        let state = test_state();
        let id = state.sessions.create().await;
        let app = build_router(state.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, format!("wildfire_session={}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .contains("Max-Age=0"));
        assert!(!state.sessions.is_active(&id).await);
    }
}
