//! Server and Identity Provider Access
//!
//! Traits the page workflows are written against, plus their HTTP
//! implementations.

pub mod client;
pub mod error;
pub mod identity;
pub mod types;

use async_trait::async_trait;

pub use client::HttpBackend;
pub use error::ClientError;
pub use identity::{FirebaseAuth, IdentityError, IdentityProvider, IdentitySession};
pub use types::{
    DashboardStats, FetchRequest, FetchResult, PredictionRequest, PredictionResult,
    WeatherData, WeatherTrendPoint,
};

/// Dashboard endpoints of the WildFire server
#[async_trait(?Send)]
pub trait DashboardBackend {
    /// GET /api/dashboard_stats
    async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError>;

    /// GET /api/weather_trends
    async fn weather_trends(&self) -> Result<Vec<WeatherTrendPoint>, ClientError>;

    /// POST /fetch_satellite_data
    async fn fetch_satellite_data(&self, request: &FetchRequest) -> Result<FetchResult, ClientError>;

    /// POST /predict
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ClientError>;
}

/// Exchanges an identity token for a server-side session
#[async_trait(?Send)]
pub trait SessionVerifier {
    /// POST /api/auth/verify. Only the status is inspected: `Ok(true)` when
    /// the server accepted the token.
    async fn verify(&self, token: &str) -> Result<bool, ClientError>;
}
