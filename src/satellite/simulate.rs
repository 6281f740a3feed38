//! Simulated provider data, used when live providers are unavailable.

use rand::Rng;

use super::{round2, Hotspot, WeatherReading};

/// Random hotspots inside India's rough bounding box, all stamped with
/// `acq_date`.
pub fn hotspots(acq_date: &str) -> Vec<Hotspot> {
    let mut rng = rand::rng();
    let count = rng.random_range(5..=50);

    (0..count)
        .map(|_| Hotspot {
            latitude: rng.random_range(15.0..=25.0),
            longitude: rng.random_range(70.0..=85.0),
            brightness: Some(rng.random_range(300.0..=500.0)),
            acq_date: Some(acq_date.to_string()),
            confidence: Some(serde_json::Value::from(rng.random_range(40i64..=100))),
        })
        .collect()
}

pub fn weather() -> WeatherReading {
    let mut rng = rand::rng();

    WeatherReading {
        temperature: round2(rng.random_range(20.0..=45.0)),
        humidity: round2(rng.random_range(10.0..=60.0)),
        wind_speed: round2(rng.random_range(5.0..=35.0)),
        rainfall: round2(rng.random_range(0.0..=10.0)),
        ndvi: round2(rng.random_range(0.1..=0.8)),
    }
}
