//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::alerts::AlertDispatcher;
use crate::config::Config;
use crate::model::{HttpModel, ModelError, RiskModel};
use crate::monitor::Monitor;
use crate::satellite::SatelliteService;
use crate::session::SessionStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Live dashboard figures
    pub monitor: Arc<Monitor>,
    /// Hotspot and weather providers
    pub satellite: Arc<SatelliteService>,
    /// Risk classifier, absent until a model is configured
    pub model: Option<Arc<dyn RiskModel>>,
    pub alerts: Arc<AlertDispatcher>,
    pub sessions: Arc<SessionStore>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build state from configuration. The monitor starts with a seeded
    /// weather history.
    pub fn new(config: Config) -> Result<Self, ModelError> {
        let model = HttpModel::from_config(&config.model)?
            .map(|model| Arc::new(model) as Arc<dyn RiskModel>);

        Ok(Self {
            monitor: Arc::new(Monitor::seeded()),
            satellite: Arc::new(SatelliteService::new(&config.satellite)),
            model,
            alerts: Arc::new(AlertDispatcher::from_config(&config.alerts)),
            sessions: Arc::new(SessionStore::new(Duration::from_secs(
                config.server.session_ttl_secs,
            ))),
            config: Arc::new(config),
            start_time: Instant::now(),
        })
    }

    /// Replace the risk model
    pub fn with_model(mut self, model: Arc<dyn RiskModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }
}
