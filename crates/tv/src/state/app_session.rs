//! Session-scoped navigation state
//!
//! The app state is created once per navigation controller and handed to
//! every caller, instead of being looked up globally. A new controller (a
//! new UI tree) gets a new app state; the same controller always gets the
//! cached one back.

use std::sync::Arc;

use crate::application::JetcasterAppState;
use crate::error::NavigationError;
use crate::infrastructure::navigation::InMemoryNavHost;
use crate::ports::outbound::NavHostPort;

/// Holder for the app state of one UI session
#[derive(Debug, Default)]
pub struct AppSession {
    app_state: Option<JetcasterAppState>,
}

impl AppSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the app state for `nav_host`, creating it on first use
    ///
    /// The cached state is reused only while the controller is the same
    /// instance.
    pub fn remember(&mut self, nav_host: Arc<dyn NavHostPort>) -> JetcasterAppState {
        if let Some(app_state) = &self.app_state {
            if same_controller(app_state.nav_host(), &nav_host) {
                return app_state.clone();
            }
            tracing::debug!("Navigation controller changed, rebuilding app state");
        }

        let app_state = JetcasterAppState::new(nav_host);
        self.app_state = Some(app_state.clone());
        app_state
    }

    /// Return the remembered app state, or create one over a default
    /// in-memory controller
    pub fn remember_default(&mut self) -> Result<JetcasterAppState, NavigationError> {
        match &self.app_state {
            Some(app_state) => Ok(app_state.clone()),
            None => {
                let nav_host: Arc<dyn NavHostPort> = Arc::new(InMemoryNavHost::jetcaster()?);
                Ok(self.remember(nav_host))
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.app_state.is_some()
    }

    /// End the session, dropping the app state and its controller handle
    pub fn forget(&mut self) {
        if self.app_state.take().is_some() {
            tracing::debug!("App session ended");
        }
    }
}

fn same_controller(a: &Arc<dyn NavHostPort>, b: &Arc<dyn NavHostPort>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::testing::RecordingNavHost;

    #[test]
    fn same_controller_yields_the_same_app_state() {
        let mut session = AppSession::new();
        let nav_host: Arc<dyn NavHostPort> = Arc::new(RecordingNavHost::new());

        let first = session.remember(nav_host.clone());
        let second = session.remember(nav_host.clone());

        assert!(same_controller(first.nav_host(), second.nav_host()));
        assert!(same_controller(first.nav_host(), &nav_host));
    }

    #[test]
    fn new_controller_rebuilds_the_app_state() {
        let mut session = AppSession::new();
        let old_host = Arc::new(RecordingNavHost::new());
        let new_host = Arc::new(RecordingNavHost::new());

        session.remember(old_host.clone());
        let app_state = session.remember(new_host.clone());
        app_state.navigate_to_library();

        assert!(old_host.calls().is_empty());
        assert_eq!(new_host.navigated_routes(), vec!["/library"]);
    }

    #[test]
    fn remember_default_creates_an_in_memory_controller_once() {
        let mut session = AppSession::new();

        let first = session.remember_default().expect("default graph is valid");
        let second = session.remember_default().expect("default graph is valid");

        assert!(same_controller(first.nav_host(), second.nav_host()));
    }

    #[test]
    fn remember_default_keeps_an_injected_controller() {
        let mut session = AppSession::new();
        let nav_host = Arc::new(RecordingNavHost::new());
        session.remember(nav_host.clone());

        session
            .remember_default()
            .expect("uses injected controller")
            .navigate_to_settings();

        assert_eq!(nav_host.navigated_routes(), vec!["/settings"]);
    }

    #[test]
    fn forget_ends_the_session() {
        let mut session = AppSession::new();
        session.remember_default().expect("default graph is valid");
        assert!(session.is_active());

        session.forget();

        assert!(!session.is_active());
    }
}
