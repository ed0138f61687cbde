//! Jetcaster TV navigation crate.
//!
//! This crate contains the route definitions, the navigation facade used by
//! UI callers, and the host navigation adapters it delegates to.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::routes;

// Re-export commonly used entrypoints
pub use application::JetcasterAppState;
pub use domain::{EpisodeUri, PodcastUri};
pub use error::{ConfigError, NavigationError};
pub use infrastructure::navigation::{BackStackEntry, InMemoryNavHost, NavGraph};
pub use ports::outbound::NavHostPort;
pub use state::AppSession;
pub use ui::routes::{RoutePattern, Screen, ScreenKind};
