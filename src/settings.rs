//! User settings in `<config_dir>/hub-bridge/settings.toml`.

use crate::error::{Error, Result};
use crate::identity::DEFAULT_WEB_HOST;
use crate::platform::DEFAULT_API_URL;
use crate::store::APP_DIR;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename for settings.
const SETTINGS_FILE: &str = "settings.toml";

/// Service endpoints, overridable for GitHub Enterprise
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// REST API base URL
    pub api_url: String,
    /// Web host project URLs are parsed against
    pub web_host: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            web_host: DEFAULT_WEB_HOST.to_string(),
        }
    }
}

/// Get path to the default settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

/// Load settings from disk.
///
/// Returns defaults if the file doesn't exist; absent fields keep their defaults.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Store(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}
