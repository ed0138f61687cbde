//! Host navigation controller implementations
//!
//! `InMemoryNavHost` resolves pushed routes against a `NavGraph` of
//! registered templates and keeps the resulting back stack.

mod graph;
mod host;

pub use graph::{NavGraph, NavGraphBuilder};
pub use host::{BackStackEntry, InMemoryNavHost};
