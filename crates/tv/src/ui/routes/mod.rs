//! Screens of the TV app and the route strings that reach them.
//!
//! Every screen renders to a path. `Show` and `Player` embed an opaque
//! identifier as their last segment; their templates reserve a named
//! placeholder (`{showUri}`, `{episodeUri}`) that the host controller uses
//! when matching pushed routes.

mod pattern;

use std::fmt;

pub use pattern::RoutePattern;

use crate::domain::{EpisodeUri, PodcastUri};

/// A navigation destination
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Screen {
    Discover,
    Library,
    Search,
    Profile,
    Settings,
    /// Podcast details for the given podcast
    Show(PodcastUri),
    /// Playback of the given episode
    Player(EpisodeUri),
}

impl Screen {
    pub const DISCOVER_ROUTE: &'static str = "/";
    pub const LIBRARY_ROUTE: &'static str = "/library";
    pub const SEARCH_ROUTE: &'static str = "/search";
    pub const PROFILE_ROUTE: &'static str = "/profile";
    pub const SETTINGS_ROUTE: &'static str = "/settings";

    pub const SHOW_ROOT: &'static str = "/show";
    pub const SHOW_ARGUMENT: &'static str = "showUri";
    pub const SHOW_TEMPLATE: &'static str = "/show/{showUri}";

    pub const PLAYER_ROOT: &'static str = "/player";
    pub const PLAYER_ARGUMENT: &'static str = "episodeUri";
    pub const PLAYER_TEMPLATE: &'static str = "/player/{episodeUri}";

    pub fn show(podcast_uri: impl Into<PodcastUri>) -> Self {
        Self::Show(podcast_uri.into())
    }

    pub fn player(episode_uri: impl Into<EpisodeUri>) -> Self {
        Self::Player(episode_uri.into())
    }

    /// The route string pushed to the host controller
    pub fn route(&self) -> String {
        match self {
            Self::Show(podcast_uri) => format!("{}/{}", Self::SHOW_ROOT, podcast_uri),
            Self::Player(episode_uri) => format!("{}/{}", Self::PLAYER_ROOT, episode_uri),
            other => other.kind().template().to_string(),
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Discover => ScreenKind::Discover,
            Self::Library => ScreenKind::Library,
            Self::Search => ScreenKind::Search,
            Self::Profile => ScreenKind::Profile,
            Self::Settings => ScreenKind::Settings,
            Self::Show(_) => ScreenKind::Show,
            Self::Player(_) => ScreenKind::Player,
        }
    }

    /// The registered template this screen is matched by
    pub fn template(&self) -> &'static str {
        self.kind().template()
    }

    /// Route template registry, in registration order
    pub fn templates() -> [&'static str; 7] {
        ScreenKind::ALL.map(ScreenKind::template)
    }

    /// Resolve a concrete route back to the screen it was rendered from
    pub fn resolve(route: &str) -> Option<Self> {
        ScreenKind::ALL.into_iter().find_map(|kind| {
            let pattern = RoutePattern::parse(kind.template()).ok()?;
            let mut arguments = pattern.matches(route)?;
            match kind {
                ScreenKind::Discover => Some(Self::Discover),
                ScreenKind::Library => Some(Self::Library),
                ScreenKind::Search => Some(Self::Search),
                ScreenKind::Profile => Some(Self::Profile),
                ScreenKind::Settings => Some(Self::Settings),
                ScreenKind::Show => arguments.remove(Self::SHOW_ARGUMENT).map(Self::show),
                ScreenKind::Player => arguments.remove(Self::PLAYER_ARGUMENT).map(Self::player),
            }
        })
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

/// Fieldless discriminant of [`Screen`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Discover,
    Library,
    Search,
    Profile,
    Settings,
    Show,
    Player,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 7] = [
        ScreenKind::Discover,
        ScreenKind::Library,
        ScreenKind::Search,
        ScreenKind::Profile,
        ScreenKind::Settings,
        ScreenKind::Show,
        ScreenKind::Player,
    ];

    pub fn template(self) -> &'static str {
        match self {
            ScreenKind::Discover => Screen::DISCOVER_ROUTE,
            ScreenKind::Library => Screen::LIBRARY_ROUTE,
            ScreenKind::Search => Screen::SEARCH_ROUTE,
            ScreenKind::Profile => Screen::PROFILE_ROUTE,
            ScreenKind::Settings => Screen::SETTINGS_ROUTE,
            ScreenKind::Show => Screen::SHOW_TEMPLATE,
            ScreenKind::Player => Screen::PLAYER_TEMPLATE,
        }
    }

    pub fn is_parameterized(self) -> bool {
        matches!(self, ScreenKind::Show | ScreenKind::Player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_screens() -> Vec<Screen> {
        vec![
            Screen::Discover,
            Screen::Library,
            Screen::Search,
            Screen::Profile,
            Screen::Settings,
            Screen::show("abc123"),
            Screen::player("ep-42"),
        ]
    }

    #[test]
    fn static_screens_render_fixed_routes() {
        assert_eq!(Screen::Discover.route(), "/");
        assert_eq!(Screen::Library.route(), "/library");
        assert_eq!(Screen::Search.route(), "/search");
        assert_eq!(Screen::Profile.route(), "/profile");
        assert_eq!(Screen::Settings.route(), "/settings");
    }

    #[test]
    fn parameterized_screens_embed_identifier() {
        assert_eq!(Screen::show("abc123").route(), "/show/abc123");
        assert_eq!(Screen::player("ep-42").route(), "/player/ep-42");
        assert_eq!(Screen::player("ep-42").to_string(), "/player/ep-42");
    }

    #[test]
    fn template_registry_is_complete_and_ordered() {
        assert_eq!(
            Screen::templates(),
            [
                "/",
                "/library",
                "/search",
                "/profile",
                "/settings",
                "/show/{showUri}",
                "/player/{episodeUri}",
            ]
        );
    }

    #[test]
    fn parameterized_templates_differ_from_instances() {
        let show = Screen::show("abc123");
        assert_ne!(show.template(), show.route());
        assert!(show.template().contains("{showUri}"));

        let player = Screen::player("ep-42");
        assert_ne!(player.template(), player.route());
        assert!(player.template().contains("{episodeUri}"));
    }

    #[test]
    fn rendered_routes_are_unique() {
        let routes: HashSet<String> = sample_screens().iter().map(Screen::route).collect();
        assert_eq!(routes.len(), 7);
    }

    #[test]
    fn every_template_parses() {
        for template in Screen::templates() {
            let pattern = RoutePattern::parse(template).expect(template);
            let kind = ScreenKind::ALL
                .into_iter()
                .find(|k| k.template() == template)
                .expect("template belongs to a kind");
            assert_eq!(pattern.has_arguments(), kind.is_parameterized());
        }
    }

    #[test]
    fn resolve_recovers_rendered_screens() {
        for screen in sample_screens() {
            assert_eq!(Screen::resolve(&screen.route()), Some(screen));
        }
    }

    #[test]
    fn resolve_rejects_unknown_routes() {
        assert_eq!(Screen::resolve("/downloads"), None);
        assert_eq!(Screen::resolve("/show/"), None);
        assert_eq!(Screen::resolve("library"), None);
    }
}
