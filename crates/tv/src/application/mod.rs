//! Application layer: the navigation facade used by UI callers.

pub mod app_state;

pub use app_state::JetcasterAppState;
