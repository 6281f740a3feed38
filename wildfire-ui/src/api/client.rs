//! HTTP API Client
//!
//! `gloo-net` implementation of the WildFire server endpoints.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::error::ClientError;
use super::types::{
    DashboardStats, FetchRequest, FetchResult, PredictionRequest, PredictionResult,
    WeatherTrendPoint,
};
use super::{DashboardBackend, SessionVerifier};

pub const STATS_PATH: &str = "/api/dashboard_stats";
pub const TRENDS_PATH: &str = "/api/weather_trends";
pub const FETCH_PATH: &str = "/fetch_satellite_data";
pub const PREDICT_PATH: &str = "/predict";
pub const VERIFY_PATH: &str = "/api/auth/verify";

/// Client for the WildFire server
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    /// Client for the server that served the page; paths stay relative.
    pub fn same_origin() -> Self {
        Self::default()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::from_status(response.status(), &body));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl DashboardBackend for HttpBackend {
    async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get_json(STATS_PATH).await
    }

    async fn weather_trends(&self) -> Result<Vec<WeatherTrendPoint>, ClientError> {
        self.get_json(TRENDS_PATH).await
    }

    async fn fetch_satellite_data(&self, request: &FetchRequest) -> Result<FetchResult, ClientError> {
        self.post_json(FETCH_PATH, request).await
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ClientError> {
        self.post_json(PREDICT_PATH, request).await
    }
}

#[async_trait(?Send)]
impl SessionVerifier for HttpBackend {
    async fn verify(&self, token: &str) -> Result<bool, ClientError> {
        #[derive(serde::Serialize)]
        struct VerifyRequest<'a> {
            token: &'a str,
        }

        let response = Request::post(&self.url(VERIFY_PATH))
            .json(&VerifyRequest { token })
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(response.ok())
    }
}
