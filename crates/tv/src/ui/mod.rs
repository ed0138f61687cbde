//! UI-facing navigation surface.
//!
//! Screen composition and rendering live in the host UI toolkit; this module
//! only owns the route definitions screens are registered under.

pub mod routes;

pub use routes::{RoutePattern, Screen, ScreenKind};
