//! State Management
//!
//! Owned reactive context for each page plus the pure selectors that turn
//! server responses into display state.

pub mod auth;
pub mod dashboard;
pub mod nav;

pub use auth::{AuthError, AuthMode, AuthState, Banner, BannerKind};
pub use dashboard::{
    DashboardContext, FetchStatus, PredictionRisk, PredictionView, RiskBorder, TrendSeries,
};
pub use nav::{NavItem, NavOutcome, NavState, Section};
