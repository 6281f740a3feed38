//! OpenWeatherMap current-weather client

use reqwest::Client;
use serde::Deserialize;

use super::{round2, SatelliteError, WeatherReading};
use crate::config::SatelliteConfig;

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Country suffix appended to region queries
const COUNTRY_SUFFIX: &str = "IN";

const MS_TO_KMH: f64 = 3.6;

pub struct WeatherClient {
    client: Client,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainBlock,
    wind: WindBlock,
    #[serde(default)]
    rain: Option<RainBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct RainBlock {
    #[serde(rename = "1h", default)]
    one_hour: f64,
}

impl From<CurrentWeather> for WeatherReading {
    fn from(w: CurrentWeather) -> Self {
        Self {
            temperature: w.main.temp,
            humidity: w.main.humidity,
            wind_speed: w.wind.speed * MS_TO_KMH,
            rainfall: w.rain.map(|r| r.one_hour).unwrap_or(0.0),
            // Vegetation index estimate until a real NDVI source is wired in
            ndvi: round2(0.5 + w.main.temp / 100.0),
        }
    }
}

impl WeatherClient {
    pub fn new(client: Client, config: &SatelliteConfig) -> Self {
        Self {
            client,
            api_key: config.openweather_api_key.clone(),
        }
    }

    pub async fn fetch(&self, region: &str) -> Result<WeatherReading, SatelliteError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(SatelliteError::MissingKey("OPENWEATHER_API_KEY"))?;

        let response = self.client.get(url(region, key)).send().await?;

        if !response.status().is_success() {
            return Err(SatelliteError::Status {
                provider: "Weather",
                status: response.status().as_u16(),
            });
        }

        let current: CurrentWeather = response.json().await?;
        Ok(current.into())
    }
}

fn url(region: &str, key: &str) -> String {
    format!(
        "{}?q={}&appid={}&units=metric",
        OPENWEATHER_URL,
        urlencoding::encode(&format!("{},{}", region, COUNTRY_SUFFIX)),
        urlencoding::encode(key)
    )
}
