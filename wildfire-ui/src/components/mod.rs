//! UI Components
//!
//! Leptos components for the dashboard and login pages.

pub mod auth_banner;
pub mod chart;
pub mod fetch_panel;
pub mod loading;
pub mod prediction_panel;
pub mod sidebar;
pub mod stat_cards;

pub use auth_banner::AuthBanner;
pub use chart::ChartCanvas;
pub use fetch_panel::FetchPanel;
pub use loading::InlineLoading;
pub use prediction_panel::PredictionPanel;
pub use sidebar::{MenuToggle, Sidebar};
pub use stat_cards::StatCards;
