//! NASA FIRMS hotspot client

use reqwest::Client;

use super::{Hotspot, SatelliteError};
use crate::config::SatelliteConfig;

const FIRMS_BASE_URL: &str = "https://firms.modaps.eosdis.nasa.gov/api/country/json";

/// Days of detections requested per fetch
const DAY_RANGE: u32 = 1;

/// Country-level active fire query
pub struct FirmsClient {
    client: Client,
    map_key: Option<String>,
    country: String,
    source: String,
}

impl FirmsClient {
    pub fn new(client: Client, config: &SatelliteConfig) -> Self {
        Self {
            client,
            map_key: config.firms_map_key.clone(),
            country: config.country.clone(),
            source: config.source.clone(),
        }
    }

    /// Country-level rows carry no state, so every detection in the
    /// configured country is returned.
    pub async fn fetch(&self) -> Result<Vec<Hotspot>, SatelliteError> {
        let key = self
            .map_key
            .as_deref()
            .ok_or(SatelliteError::MissingKey("NASA_FIRMS_MAP_KEY"))?;

        let response = self.client.get(self.url(key)).send().await?;

        if !response.status().is_success() {
            return Err(SatelliteError::Status {
                provider: "NASA FIRMS",
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    fn url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            FIRMS_BASE_URL, key, self.source, self.country, DAY_RANGE
        )
    }
}
