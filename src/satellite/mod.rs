//! Satellite and Weather Data
//!
//! Active fire hotspots come from NASA FIRMS and current weather from
//! OpenWeatherMap. When a provider key is missing or a call fails, the
//! service answers with simulated data instead so the dashboard keeps
//! working offline.

pub mod firms;
pub mod simulate;
pub mod weather;

pub use firms::FirmsClient;
pub use weather::WeatherClient;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::SatelliteConfig;

/// Weather observation used as prediction input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// km/h
    pub wind_speed: f64,
    /// mm in the last hour
    pub rainfall: f64,
    pub ndvi: f64,
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 50.0,
            wind_speed: 10.0,
            rainfall: 0.0,
            ndvi: 0.5,
        }
    }
}

/// One thermal anomaly detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, alias = "bright_ti4")]
    pub brightness: Option<f64>,
    #[serde(default)]
    pub acq_date: Option<String>,
    /// Numeric for MODIS, a letter grade for VIIRS
    #[serde(default)]
    pub confidence: Option<serde_json::Value>,
}

/// Errors from the satellite and weather providers
#[derive(Error, Debug)]
pub enum SatelliteError {
    #[error("{0} key missing")]
    MissingKey(&'static str),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{provider} API error: {status}")]
    Status { provider: &'static str, status: u16 },
}

/// Hotspot and weather lookups with simulated fallback
pub struct SatelliteService {
    firms: FirmsClient,
    weather: WeatherClient,
}

impl SatelliteService {
    pub fn new(config: &SatelliteConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            firms: FirmsClient::new(client.clone(), config),
            weather: WeatherClient::new(client, config),
        }
    }

    /// Hotspots for the region's country, or a simulated set.
    pub async fn hotspots(&self, region: &str, from_date: &str, to_date: &str) -> Vec<Hotspot> {
        tracing::debug!(region, from_date, to_date, "Fetching hotspots");

        match self.firms.fetch().await {
            Ok(hotspots) => {
                tracing::info!("Fetched {} live hotspots from NASA FIRMS", hotspots.len());
                hotspots
            }
            Err(SatelliteError::MissingKey(name)) => {
                tracing::warn!("{} missing, using simulated hotspots", name);
                simulate::hotspots(from_date)
            }
            Err(e) => {
                tracing::error!("NASA FIRMS fetch failed: {}", e);
                simulate::hotspots(from_date)
            }
        }
    }

    /// Current weather for the region, or a simulated reading.
    pub async fn weather(&self, region: &str) -> WeatherReading {
        match self.weather.fetch(region).await {
            Ok(reading) => reading,
            Err(SatelliteError::MissingKey(name)) => {
                tracing::warn!("{} missing, using simulated weather", name);
                simulate::weather()
            }
            Err(e) => {
                tracing::error!("Weather fetch failed: {}", e);
                simulate::weather()
            }
        }
    }
}

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.8234), 0.82);
        assert_eq!(round2(36.7261), 36.73);
        assert_eq!(round2(-1.005), -1.0);
    }

    #[test]
    fn test_hotspot_accepts_viirs_rows() {
        let hotspot: Hotspot = serde_json::from_str(
            r#"{"latitude": 21.2, "longitude": 79.1, "bright_ti4": 331.4, "acq_date": "2024-04-02", "confidence": "n"}"#,
        )
        .unwrap();

        assert_eq!(hotspot.brightness, Some(331.4));
        assert_eq!(hotspot.confidence, Some(serde_json::json!("n")));
    }

    #[tokio::test]
    async fn test_keyless_service_simulates() {
        let service = SatelliteService::new(&SatelliteConfig::default());

        let hotspots = service.hotspots("Odisha", "2024-04-01", "2024-04-02").await;
        assert!((5..=50).contains(&hotspots.len()));
        assert!(hotspots.iter().all(|h| h.acq_date.as_deref() == Some("2024-04-01")));

        let weather = service.weather("Odisha").await;
        assert!((20.0..=45.0).contains(&weather.temperature));
        assert!((0.1..=0.8).contains(&weather.ndvi));
    }
}
