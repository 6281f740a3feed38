//! Page Workflows
//!
//! Async request orchestration for the dashboard and login pages. Each
//! workflow is generic over the `api` traits and only touches reactive
//! state, so it runs the same in the browser and under native tests.
//! Timers, alerts and redirects stay in the components.

pub mod auth;
pub mod dashboard;

pub use auth::{authenticate, submit_auth, Credentials};
pub use dashboard::{fetch_satellite_data, refresh_dashboard, run_prediction, spawn_refresh};
