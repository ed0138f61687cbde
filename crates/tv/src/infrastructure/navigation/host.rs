//! In-memory host navigation controller
//!
//! Keeps a back stack of resolved entries behind a lock so it can be shared
//! as `Arc<dyn NavHostPort>`. Used by the runner and by tests; a UI toolkit
//! binding would provide its own `NavHostPort` instead.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::NavigationError;
use crate::infrastructure::navigation::NavGraph;
use crate::ports::outbound::NavHostPort;
use crate::ui::routes::Screen;

/// One resolved entry on the back stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStackEntry {
    /// The concrete route that was pushed
    pub route: String,
    /// The registered template it matched
    pub template: String,
    /// Placeholder bindings extracted from the route
    pub arguments: BTreeMap<String, String>,
}

impl BackStackEntry {
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    pub fn screen(&self) -> Option<Screen> {
        Screen::resolve(&self.route)
    }
}

/// Navigation controller backed by an in-memory back stack
#[derive(Debug)]
pub struct InMemoryNavHost {
    graph: NavGraph,
    back_stack: RwLock<Vec<BackStackEntry>>,
}

impl InMemoryNavHost {
    /// Create a controller whose back stack holds the graph's start destination
    pub fn new(graph: NavGraph) -> Result<Self, NavigationError> {
        let start = Self::resolve_entry(&graph, graph.start_route())?;
        tracing::debug!(start = %start.route, "Navigation host created");

        Ok(Self {
            graph,
            back_stack: RwLock::new(vec![start]),
        })
    }

    /// Controller for the default Jetcaster graph, starting at Discover
    pub fn jetcaster() -> Result<Self, NavigationError> {
        Self::new(NavGraph::jetcaster()?)
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    /// Push `route`, or reject it when no destination matches
    ///
    /// A rejected route leaves the back stack unchanged.
    pub fn try_navigate(&self, route: &str) -> Result<BackStackEntry, NavigationError> {
        let entry = Self::resolve_entry(&self.graph, route)?;

        match self.back_stack.write() {
            Ok(mut guard) => guard.push(entry.clone()),
            Err(e) => {
                tracing::error!("Failed to acquire write lock for back stack: {}", e);
                e.into_inner().push(entry.clone());
            }
        }

        Ok(entry)
    }

    /// The entry on top of the back stack
    pub fn current_entry(&self) -> Option<BackStackEntry> {
        self.read(|stack| stack.last().cloned())
    }

    pub fn current_route(&self) -> Option<String> {
        self.read(|stack| stack.last().map(|entry| entry.route.clone()))
    }

    pub fn current_screen(&self) -> Option<Screen> {
        self.current_entry().and_then(|entry| entry.screen())
    }

    /// Routes on the back stack, bottom first
    pub fn back_stack(&self) -> Vec<String> {
        self.read(|stack| stack.iter().map(|entry| entry.route.clone()).collect())
    }

    pub fn depth(&self) -> usize {
        self.read(|stack| stack.len())
    }

    fn resolve_entry(graph: &NavGraph, route: &str) -> Result<BackStackEntry, NavigationError> {
        let (pattern, arguments) = graph
            .resolve(route)
            .ok_or_else(|| NavigationError::unknown_route(route))?;

        Ok(BackStackEntry {
            route: route.to_string(),
            template: pattern.template().to_string(),
            arguments,
        })
    }

    fn read<T>(&self, f: impl FnOnce(&[BackStackEntry]) -> T) -> T {
        match self.back_stack.read() {
            Ok(guard) => f(&guard),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for back stack: {}", e);
                f(&e.into_inner())
            }
        }
    }
}

impl NavHostPort for InMemoryNavHost {
    fn navigate(&self, route: &str) {
        match self.try_navigate(route) {
            Ok(entry) => {
                tracing::info!(route = %entry.route, template = %entry.template, "Navigated");
            }
            Err(e) => {
                tracing::warn!("Navigation rejected: {}", e);
            }
        }
    }

    fn pop_back_stack(&self) -> bool {
        let popped = match self.back_stack.write() {
            Ok(mut guard) => guard.pop(),
            Err(e) => {
                tracing::error!("Failed to acquire write lock for back stack: {}", e);
                e.into_inner().pop()
            }
        };

        match popped {
            Some(entry) => {
                tracing::info!(route = %entry.route, "Popped back stack");
                true
            }
            None => {
                tracing::debug!("Back stack already empty");
                false
            }
        }
    }
}
