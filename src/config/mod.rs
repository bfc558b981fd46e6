pub mod paths;
pub mod settings;

use std::path::Path;

pub use paths::AppPaths;
pub use settings::Settings;

use crate::error::{AppError, AppResult};
use crate::platform::EnvSource;
use crate::profile::parse_profile_list;

/// Environment variable listing the active profiles, comma separated.
pub const ACTIVE_PROFILES_VAR: &str = "APP_PROFILES_ACTIVE";

pub fn load_settings(explicit: Option<&Path>) -> AppResult<Settings> {
    match explicit {
        Some(path) if !path.exists() => Err(AppError::Config(format!(
            "settings file not found: {}",
            path.display()
        ))),
        Some(path) => settings::load(path),
        None => load_default_settings(&AppPaths::discover()?),
    }
}

/// Settings from the default location. A missing file means defaults.
pub fn load_default_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(&paths.settings_file())
}

/// Active profile flags, taken from the first source that names any:
/// command line, then environment, then settings file.
pub fn active_profile_flags<E: EnvSource + ?Sized>(
    cli_profiles: &[String],
    env: &E,
    settings: &Settings,
) -> Vec<String> {
    let from_cli: Vec<String> = cli_profiles
        .iter()
        .flat_map(|raw| parse_profile_list(raw))
        .collect();
    if !from_cli.is_empty() {
        return from_cli;
    }

    let from_env = env
        .var(ACTIVE_PROFILES_VAR)
        .map(|raw| parse_profile_list(&raw))
        .unwrap_or_default();
    if !from_env.is_empty() {
        return from_env;
    }

    settings
        .active_profiles
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
