//! Navigation facade for the TV app
//!
//! Each operation builds a [`Screen`] route and forwards it to the host
//! navigation controller. Nothing is validated or reported back: rejected
//! routes are the controller's concern.

use std::fmt;
use std::sync::Arc;

use crate::ports::outbound::NavHostPort;
use crate::ui::routes::Screen;

/// Named navigation operations over the host navigation controller
///
/// Cheap to clone; all clones share the same controller.
#[derive(Clone)]
pub struct JetcasterAppState {
    nav_host: Arc<dyn NavHostPort>,
}

impl JetcasterAppState {
    pub fn new(nav_host: Arc<dyn NavHostPort>) -> Self {
        Self { nav_host }
    }

    /// The controller every call is delegated to
    pub fn nav_host(&self) -> &Arc<dyn NavHostPort> {
        &self.nav_host
    }

    pub fn navigate_to_discover(&self) {
        self.navigate(Screen::Discover);
    }

    pub fn navigate_to_library(&self) {
        self.navigate(Screen::Library);
    }

    pub fn navigate_to_profile(&self) {
        self.navigate(Screen::Profile);
    }

    pub fn navigate_to_search(&self) {
        self.navigate(Screen::Search);
    }

    pub fn navigate_to_settings(&self) {
        self.navigate(Screen::Settings);
    }

    /// Open the details screen of a podcast
    ///
    /// `podcast_uri` is embedded verbatim as the last route segment.
    pub fn show_podcast_details(&self, podcast_uri: &str) {
        self.navigate(Screen::show(podcast_uri));
    }

    /// Open the player for an episode
    ///
    /// `episode_uri` is embedded verbatim as the last route segment.
    pub fn play_episode(&self, episode_uri: &str) {
        self.navigate(Screen::player(episode_uri));
    }

    /// Pop one entry off the controller's back stack
    pub fn navigate_back(&self) {
        let popped = self.nav_host.pop_back_stack();
        tracing::debug!(popped, "Navigate back");
    }

    fn navigate(&self, screen: Screen) {
        let route = screen.route();
        tracing::debug!(route = %route, "Navigate");
        self.nav_host.navigate(&route);
    }
}

impl fmt::Debug for JetcasterAppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JetcasterAppState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::testing::{NavCall, RecordingNavHost};
    use crate::ports::outbound::MockNavHostPort;

    fn app_state_expecting_route(route: &'static str) -> JetcasterAppState {
        let mut nav_host = MockNavHostPort::new();
        nav_host
            .expect_navigate()
            .withf(move |r| r == route)
            .times(1)
            .return_const(());
        nav_host.expect_pop_back_stack().never();
        JetcasterAppState::new(Arc::new(nav_host))
    }

    #[test]
    fn navigate_to_discover_pushes_root() {
        app_state_expecting_route("/").navigate_to_discover();
    }

    #[test]
    fn navigate_to_library_pushes_library() {
        app_state_expecting_route("/library").navigate_to_library();
    }

    #[test]
    fn navigate_to_profile_pushes_profile() {
        app_state_expecting_route("/profile").navigate_to_profile();
    }

    #[test]
    fn navigate_to_search_pushes_search() {
        app_state_expecting_route("/search").navigate_to_search();
    }

    #[test]
    fn navigate_to_settings_pushes_settings() {
        app_state_expecting_route("/settings").navigate_to_settings();
    }

    #[test]
    fn show_podcast_details_pushes_show_route() {
        app_state_expecting_route("/show/abc123").show_podcast_details("abc123");
    }

    #[test]
    fn play_episode_pushes_player_route() {
        app_state_expecting_route("/player/ep-42").play_episode("ep-42");
    }

    #[test]
    fn navigate_back_pops_once() {
        let mut nav_host = MockNavHostPort::new();
        nav_host.expect_navigate().never();
        nav_host
            .expect_pop_back_stack()
            .times(1)
            .return_const(true);

        JetcasterAppState::new(Arc::new(nav_host)).navigate_back();
    }

    #[test]
    fn navigate_back_pops_even_when_host_has_nothing_to_pop() {
        let nav_host = Arc::new(RecordingNavHost::with_pop_result(false));
        let app_state = JetcasterAppState::new(nav_host.clone());

        app_state.navigate_back();
        app_state.navigate_back();

        assert_eq!(
            nav_host.calls(),
            vec![NavCall::PopBackStack, NavCall::PopBackStack]
        );
    }

    #[test]
    fn identifiers_are_interpolated_verbatim() {
        let nav_host = Arc::new(RecordingNavHost::new());
        let app_state = JetcasterAppState::new(nav_host.clone());

        app_state.show_podcast_details("feeds.example.com%2Fpod");
        app_state.play_episode("");

        assert_eq!(
            nav_host.navigated_routes(),
            vec!["/show/feeds.example.com%2Fpod", "/player/"]
        );
    }

    #[test]
    fn clones_share_the_controller() {
        let nav_host = Arc::new(RecordingNavHost::new());
        let app_state = JetcasterAppState::new(nav_host.clone());
        let clone = app_state.clone();

        app_state.navigate_to_library();
        clone.navigate_to_search();

        assert_eq!(nav_host.navigated_routes(), vec!["/library", "/search"]);
    }
}
