//! Monitoring State
//!
//! Live dashboard figures shared by all handlers: active hotspot count,
//! global risk label and a short weather history for the trend charts.

use chrono::{Duration, Local};
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::satellite::WeatherReading;

/// Weather history kept for the trend charts
pub const HISTORY_CAPACITY: usize = 15;

/// Hourly points seeded at startup
pub const SEED_POINTS: usize = 10;

pub const INITIAL_RISK: &str = "Low Risk";

/// One weather history sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Clock label, `HH:MM`
    pub time: String,
    pub temp: f64,
    pub hum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorStats {
    pub active_hotspots: u64,
    pub global_risk: String,
}

#[derive(Debug)]
struct MonitorData {
    active_hotspots: u64,
    global_risk: String,
    history: VecDeque<TrendPoint>,
}

/// Shared monitoring state
#[derive(Debug)]
pub struct Monitor {
    data: RwLock<MonitorData>,
}

impl Monitor {
    /// State with an empty history
    pub fn new() -> Self {
        Self::with_history(VecDeque::with_capacity(HISTORY_CAPACITY))
    }

    /// State seeded with hourly readings for the past ten hours
    pub fn seeded() -> Self {
        let now = Local::now();
        let mut rng = rand::rng();

        let history = (0..SEED_POINTS)
            .map(|i| TrendPoint {
                time: (now - Duration::hours((SEED_POINTS - i) as i64))
                    .format("%H:%M")
                    .to_string(),
                temp: rng.random_range(20.0..30.0),
                hum: rng.random_range(40.0..60.0),
            })
            .collect();

        Self::with_history(history)
    }

    fn with_history(history: VecDeque<TrendPoint>) -> Self {
        Self {
            data: RwLock::new(MonitorData {
                active_hotspots: 0,
                global_risk: INITIAL_RISK.to_string(),
                history,
            }),
        }
    }

    pub async fn stats(&self) -> MonitorStats {
        let data = self.data.read().await;
        MonitorStats {
            active_hotspots: data.active_hotspots,
            global_risk: data.global_risk.clone(),
        }
    }

    /// Weather history, oldest first
    pub async fn trends(&self) -> Vec<TrendPoint> {
        self.data.read().await.history.iter().cloned().collect()
    }

    /// Store the outcome of a satellite fetch and append the reading to the
    /// history, dropping the oldest entry beyond capacity.
    pub async fn record_fetch(&self, hotspots: u64, weather: &WeatherReading) {
        let point = TrendPoint {
            time: Local::now().format("%H:%M").to_string(),
            temp: weather.temperature,
            hum: weather.humidity,
        };

        let mut data = self.data.write().await;
        data.active_hotspots = hotspots;
        data.history.push_back(point);
        while data.history.len() > HISTORY_CAPACITY {
            data.history.pop_front();
        }
    }

    pub async fn set_risk(&self, label: &str) {
        self.data.write().await.global_risk = label.to_string();
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature: f64, humidity: f64) -> WeatherReading {
        WeatherReading {
            temperature,
            humidity,
            ..WeatherReading::default()
        }
    }

    #[tokio::test]
    async fn test_initial_state() {
        let monitor = Monitor::seeded();
        let stats = monitor.stats().await;

        assert_eq!(stats.active_hotspots, 0);
        assert_eq!(stats.global_risk, "Low Risk");

        let trends = monitor.trends().await;
        assert_eq!(trends.len(), SEED_POINTS);
        assert!(trends.iter().all(|p| (20.0..30.0).contains(&p.temp)));
        assert!(trends.iter().all(|p| (40.0..60.0).contains(&p.hum)));
        assert!(trends.iter().all(|p| p.time.len() == 5));
    }

    #[tokio::test]
    async fn test_record_fetch_updates_stats() {
        let monitor = Monitor::new();
        monitor.record_fetch(17, &reading(38.5, 22.0)).await;

        assert_eq!(monitor.stats().await.active_hotspots, 17);

        let trends = monitor.trends().await;
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].temp, 38.5);
        assert_eq!(trends[0].hum, 22.0);
    }

    #[tokio::test]
    async fn test_history_is_capped() {
        let monitor = Monitor::seeded();
        for i in 0..10 {
            monitor.record_fetch(i, &reading(100.0 + i as f64, 10.0)).await;
        }

        let trends = monitor.trends().await;
        assert_eq!(trends.len(), HISTORY_CAPACITY);
        assert_eq!(trends.last().unwrap().temp, 109.0);
        // The five oldest seed points were dropped, five remain in front
        assert!(trends[4].temp < 30.0);
        assert_eq!(trends[5].temp, 100.0);
    }

    #[tokio::test]
    async fn test_set_risk() {
        let monitor = Monitor::new();
        monitor.set_risk("High Risk").await;
        assert_eq!(monitor.stats().await.global_risk, "High Risk");
    }
}
