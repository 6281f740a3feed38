//! # WildFire
//!
//! Wildfire risk monitoring server. Serves the browser dashboard and the
//! endpoints behind it.
//!
//! ## Features
//!
//! - **Hotspots**: NASA FIRMS active fire detections, simulated when no key is set
//! - **Weather trends**: OpenWeatherMap readings kept as a short history
//! - **Risk prediction**: forwards features to a trained classifier service
//! - **Alerts**: SMS and Telegram notifications on high risk
//! - **Sessions**: cookie sessions opened after browser sign-in
//!
//! ## Modules
//!
//! - [`api`]: HTTP server with Axum
//! - [`monitor`]: Live dashboard figures
//! - [`satellite`]: Hotspot and weather providers
//! - [`model`]: Risk classifier client
//! - [`alerts`]: High risk notifications
//! - [`session`]: Login sessions
//! - [`config`]: File and environment configuration

pub mod alerts;
pub mod api;
pub mod config;
pub mod model;
pub mod monitor;
pub mod satellite;
pub mod session;

pub use alerts::{AlertDispatcher, AlertReport};
pub use api::{build_router, serve, ApiError, AppState};
pub use config::{Config, ConfigError};
pub use model::{HttpModel, ModelError, ModelOutput, RiskClass, RiskModel};
pub use monitor::{Monitor, MonitorStats, TrendPoint};
pub use satellite::{Hotspot, SatelliteError, SatelliteService, WeatherReading};
pub use session::SessionStore;
