//! Runner configuration loading
//!
//! Sources, later ones winning:
//! 1. `RunnerConfig::default()`
//! 2. JSON file at:
//!    - Linux: ~/.config/jetcaster-tv/config.json
//!    - macOS: ~/Library/Application Support/com.example.jetcaster-tv/config.json
//!    - Windows: C:\Users\<User>\AppData\Roaming\example\jetcaster-tv\config\config.json
//! 3. `JETCASTER_START_ROUTE` environment variable

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ConfigError;
use crate::runner::config::RunnerConfig;

pub const START_ROUTE_ENV: &str = "JETCASTER_START_ROUTE";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Platform config file location, if a home directory is available
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "example", "jetcaster-tv")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load the runner configuration from the platform file and environment
pub fn load_runner_config() -> Result<RunnerConfig, ConfigError> {
    let path = default_config_path();
    load_from(path.as_deref(), std::env::var(START_ROUTE_ENV).ok())
}

/// Load from an explicit file path and start route override
///
/// A missing file is not an error. Blank overrides are ignored.
pub fn load_from(
    path: Option<&Path>,
    start_route_override: Option<String>,
) -> Result<RunnerConfig, ConfigError> {
    let mut config = match path {
        Some(path) if path.exists() => read_file(path)?,
        Some(path) => {
            tracing::debug!("No config file at {:?}, using defaults", path);
            RunnerConfig::default()
        }
        None => RunnerConfig::default(),
    };

    if let Some(route) = start_route_override
        .map(|route| route.trim().to_string())
        .filter(|route| !route.is_empty())
    {
        config.start_route = route;
    }

    config.validate()?;
    tracing::debug!(start_route = %config.start_route, "Runner config loaded");

    Ok(config)
}

fn read_file(path: &Path) -> Result<RunnerConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
