use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Profiles considered active when neither the command line nor the
    /// environment names any.
    #[serde(default)]
    pub active_profiles: Vec<String>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}
