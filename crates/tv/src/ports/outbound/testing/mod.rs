//! Test utilities for outbound ports
//!
//! `MockNavHostPort` (mockall) is re-exported from `ports::outbound` when the
//! `testing` feature is enabled. `RecordingNavHost` is a simpler double that
//! records every call in order.
//!
//! # Usage
//!
//! Add to your Cargo.toml:
//! ```toml
//! [dev-dependencies]
//! jetcaster-tv = { workspace = true, features = ["testing"] }
//! ```

use std::sync::Mutex;

use crate::ports::outbound::NavHostPort;

/// A call received by [`RecordingNavHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCall {
    Navigate(String),
    PopBackStack,
}

/// Navigation controller double that records calls instead of acting on them
#[derive(Debug)]
pub struct RecordingNavHost {
    calls: Mutex<Vec<NavCall>>,
    pop_result: bool,
}

impl Default for RecordingNavHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingNavHost {
    pub fn new() -> Self {
        Self::with_pop_result(true)
    }

    /// Create a recorder whose `pop_back_stack` always returns `pop_result`
    pub fn with_pop_result(pop_result: bool) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            pop_result,
        }
    }

    /// All calls received so far, oldest first
    pub fn calls(&self) -> Vec<NavCall> {
        match self.calls.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Routes pushed so far, oldest first
    pub fn navigated_routes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                NavCall::Navigate(route) => Some(route),
                NavCall::PopBackStack => None,
            })
            .collect()
    }

    fn record(&self, call: NavCall) {
        match self.calls.lock() {
            Ok(mut guard) => guard.push(call),
            Err(poisoned) => poisoned.into_inner().push(call),
        }
    }
}

impl NavHostPort for RecordingNavHost {
    fn navigate(&self, route: &str) {
        self.record(NavCall::Navigate(route.to_string()));
    }

    fn pop_back_stack(&self) -> bool {
        self.record(NavCall::PopBackStack);
        self.pop_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let host = RecordingNavHost::with_pop_result(false);

        host.navigate("/library");
        assert!(!host.pop_back_stack());
        host.navigate("/search");

        assert_eq!(
            host.calls(),
            vec![
                NavCall::Navigate("/library".to_string()),
                NavCall::PopBackStack,
                NavCall::Navigate("/search".to_string()),
            ]
        );
        assert_eq!(host.navigated_routes(), vec!["/library", "/search"]);
    }
}
