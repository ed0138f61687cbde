//! Error types for host-side navigation and runner configuration.
//!
//! The navigation facade itself reports no failures; these errors surface
//! from the in-memory host controller and from configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the host navigation controller and route templates
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No registered destination matches the requested route
    #[error("No destination registered for route: {route}")]
    UnknownRoute { route: String },

    /// A route template could not be parsed
    #[error("Invalid route template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// A route template declares the same placeholder twice
    #[error("Route template {template:?} declares argument {name:?} more than once")]
    DuplicateArgument { template: String, name: String },
}

impl NavigationError {
    pub fn unknown_route(route: impl Into<String>) -> Self {
        Self::UnknownRoute {
            route: route.into(),
        }
    }

    pub fn invalid_template(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading the runner configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configured start route does not resolve to a screen
    #[error("Start route is not a registered screen: {0}")]
    InvalidStartRoute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_route_message_names_the_route() {
        let error = NavigationError::unknown_route("/nowhere");
        assert_eq!(
            error.to_string(),
            "No destination registered for route: /nowhere"
        );
    }

    #[test]
    fn invalid_template_keeps_template_and_reason() {
        match NavigationError::invalid_template("show", "must start with '/'") {
            NavigationError::InvalidTemplate { template, reason } => {
                assert_eq!(template, "show");
                assert_eq!(reason, "must start with '/'");
            }
            other => panic!("Expected InvalidTemplate, got {other:?}"),
        }
    }
}
