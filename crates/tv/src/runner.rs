use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;

use crate::infrastructure::navigation::{InMemoryNavHost, NavGraph};
use crate::state::AppSession;
use crate::JetcasterAppState;

/// Configuration types for the runner.
pub mod config {
    use serde::{Deserialize, Serialize};

    use crate::error::ConfigError;
    use crate::ui::routes::Screen;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct RunnerConfig {
        /// Route the back stack starts from
        pub start_route: String,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                start_route: Screen::DISCOVER_ROUTE.to_string(),
            }
        }
    }

    impl RunnerConfig {
        pub fn validate(&self) -> Result<(), ConfigError> {
            match Screen::resolve(&self.start_route) {
                Some(_) => Ok(()),
                None => Err(ConfigError::InvalidStartRoute(self.start_route.clone())),
            }
        }
    }
}

use config::RunnerConfig;

/// A remote-control command read from the input stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCommand {
    Discover,
    Library,
    Search,
    Profile,
    Settings,
    Show(String),
    Play(String),
    Back,
    Stack,
    Quit,
}

impl FromStr for RemoteCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let argument = parts.next();

        if parts.next().is_some() {
            return Err(format!("too many arguments: {}", s.trim()));
        }

        match (name.as_str(), argument) {
            ("discover", None) => Ok(Self::Discover),
            ("library", None) => Ok(Self::Library),
            ("search", None) => Ok(Self::Search),
            ("profile", None) => Ok(Self::Profile),
            ("settings", None) => Ok(Self::Settings),
            ("show", Some(id)) => Ok(Self::Show(id.to_string())),
            ("play", Some(id)) => Ok(Self::Play(id.to_string())),
            ("show" | "play", None) => Err(format!("{name} needs an identifier")),
            ("back", None) => Ok(Self::Back),
            ("stack", None) => Ok(Self::Stack),
            ("quit" | "exit", None) => Ok(Self::Quit),
            (
                "discover" | "library" | "search" | "profile" | "settings" | "back" | "stack"
                | "quit" | "exit",
                Some(_),
            ) => Err(format!("{name} takes no arguments")),
            (other, _) => Err(format!("unknown command: {other}")),
        }
    }
}

impl RemoteCommand {
    fn apply(&self, app_state: &JetcasterAppState) {
        match self {
            Self::Discover => app_state.navigate_to_discover(),
            Self::Library => app_state.navigate_to_library(),
            Self::Search => app_state.navigate_to_search(),
            Self::Profile => app_state.navigate_to_profile(),
            Self::Settings => app_state.navigate_to_settings(),
            Self::Show(id) => app_state.show_podcast_details(id),
            Self::Play(id) => app_state.play_episode(id),
            Self::Back => app_state.navigate_back(),
            Self::Stack | Self::Quit => {}
        }
    }
}

/// Drive the navigation facade from remote-control commands
///
/// After every command the current route is written to `output`, or
/// `(empty)` once the back stack has been popped down to nothing.
pub fn run<R: BufRead, W: Write>(
    config: &RunnerConfig,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let graph = NavGraph::jetcaster_starting_at(&config.start_route)
        .context("building navigation graph")?;
    let nav_host = Arc::new(InMemoryNavHost::new(graph).context("creating navigation host")?);

    let mut session = AppSession::new();
    let app_state = session.remember(nav_host.clone());

    tracing::info!(start_route = %config.start_route, "Remote control ready");
    write_current_route(&mut output, &nav_host)?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<RemoteCommand>() {
            Ok(RemoteCommand::Quit) => break,
            Ok(RemoteCommand::Stack) => {
                writeln!(output, "{}", nav_host.back_stack().join(" > "))?;
            }
            Ok(command) => {
                command.apply(&app_state);
                write_current_route(&mut output, &nav_host)?;
            }
            Err(e) => {
                tracing::warn!("Ignoring command: {}", e);
                writeln!(output, "{e}")?;
            }
        }
    }

    session.forget();
    Ok(())
}

fn write_current_route<W: Write>(
    output: &mut W,
    nav_host: &InMemoryNavHost,
) -> anyhow::Result<()> {
    let route = nav_host
        .current_route()
        .unwrap_or_else(|| "(empty)".to_string());
    writeln!(output, "{route}")?;
    Ok(())
}
