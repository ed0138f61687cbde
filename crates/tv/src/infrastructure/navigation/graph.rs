//! Navigation graph: the destinations a host controller can resolve.

use std::collections::BTreeMap;

use crate::error::NavigationError;
use crate::ui::routes::{RoutePattern, Screen};

/// Registered destinations plus the route the back stack starts from
#[derive(Debug, Clone)]
pub struct NavGraph {
    start_route: String,
    destinations: Vec<RoutePattern>,
}

impl NavGraph {
    /// Graph with every [`Screen`] template registered, starting at Discover
    pub fn jetcaster() -> Result<Self, NavigationError> {
        Self::jetcaster_starting_at(Screen::DISCOVER_ROUTE)
    }

    /// Graph with every [`Screen`] template registered and a custom start
    pub fn jetcaster_starting_at(start_route: &str) -> Result<Self, NavigationError> {
        Screen::templates()
            .into_iter()
            .fold(Self::builder(start_route), NavGraphBuilder::destination)
            .build()
    }

    pub fn builder(start_route: impl Into<String>) -> NavGraphBuilder {
        NavGraphBuilder {
            start_route: start_route.into(),
            templates: Vec::new(),
        }
    }

    pub fn start_route(&self) -> &str {
        &self.start_route
    }

    pub fn destinations(&self) -> &[RoutePattern] {
        &self.destinations
    }

    /// Find the first destination matching `route`
    pub fn resolve(&self, route: &str) -> Option<(&RoutePattern, BTreeMap<String, String>)> {
        self.destinations
            .iter()
            .find_map(|pattern| pattern.matches(route).map(|args| (pattern, args)))
    }
}

/// Builder for [`NavGraph`]
#[derive(Debug, Clone)]
pub struct NavGraphBuilder {
    start_route: String,
    templates: Vec<String>,
}

impl NavGraphBuilder {
    /// Register a destination template; order decides match priority
    pub fn destination(mut self, template: impl Into<String>) -> Self {
        self.templates.push(template.into());
        self
    }

    pub fn build(self) -> Result<NavGraph, NavigationError> {
        let destinations = self
            .templates
            .iter()
            .map(|template| RoutePattern::parse(template))
            .collect::<Result<Vec<_>, _>>()?;

        let graph = NavGraph {
            start_route: self.start_route,
            destinations,
        };

        if graph.resolve(&graph.start_route).is_none() {
            return Err(NavigationError::unknown_route(graph.start_route));
        }

        Ok(graph)
    }
}
