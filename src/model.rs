//! Risk Model
//!
//! The trained classifier runs out of process. The server sends the six
//! input features to the configured model service and reads back the
//! predicted class with its class probabilities.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::ModelConfig;

/// temperature, humidity, wind_speed, rainfall, ndvi, historical_fire
pub type Features = [f64; 6];

/// Risk classes the model predicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskClass {
    Low,
    Medium,
    High,
}

impl RiskClass {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Low),
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

/// Classifier output
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelOutput {
    pub prediction: i64,
    pub probabilities: Vec<f64>,
}

impl ModelOutput {
    /// Highest class probability as a percentage
    pub fn confidence(&self) -> f64 {
        self.probabilities
            .iter()
            .copied()
            .fold(0.0_f64, f64::max)
            * 100.0
    }
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Model service error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected model output: {0}")]
    InvalidOutput(String),
}

/// A trained wildfire risk classifier
#[async_trait]
pub trait RiskModel: Send + Sync {
    async fn predict(&self, features: &Features) -> Result<ModelOutput, ModelError>;
}

/// Model served over HTTP
pub struct HttpModel {
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    features: &'a Features,
}

impl HttpModel {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ModelError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Model from config, `None` when no model service is configured.
    pub fn from_config(config: &ModelConfig) -> Result<Option<Self>, ModelError> {
        config
            .url
            .as_deref()
            .map(|url| Self::new(url, Duration::from_secs(config.request_timeout_secs)))
            .transpose()
    }
}

#[async_trait]
impl RiskModel for HttpModel {
    async fn predict(&self, features: &Features) -> Result<ModelOutput, ModelError> {
        let response = self
            .client
            .post(&self.url)
            .json(&PredictRequest { features })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::Status { status, message });
        }

        let output: ModelOutput = response.json().await?;
        if output.probabilities.is_empty() {
            return Err(ModelError::InvalidOutput("no class probabilities".to_string()));
        }

        Ok(output)
    }
}
