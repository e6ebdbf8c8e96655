//! Shared command context for CLI commands
//!
//! Extracts common setup code shared by the configure and check commands.

use hub_bridge::error::Result;
use hub_bridge::identity::UrlPattern;
use hub_bridge::platform::GitHubClient;
use hub_bridge::settings::{Settings, default_settings_path, load_settings};
use hub_bridge::store::TomlStore;
use std::path::PathBuf;
use tracing::debug;

/// Shared context for CLI commands that talk to the remote service
///
/// This struct encapsulates the common setup:
/// - Loading settings (with the `--api-url` override applied)
/// - Creating the HTTP client
/// - Building the project URL pattern for the configured web host
/// - Opening the bridge store
pub struct CommandContext {
    /// Remote service client
    pub client: GitHubClient,
    /// Project URL pattern
    pub pattern: UrlPattern,
    /// Where configured bridges are saved
    pub store: TomlStore,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(api_url: Option<&str>, store_path: Option<PathBuf>) -> Result<Self> {
        let mut settings = match default_settings_path() {
            Some(path) => load_settings(&path)?,
            None => Settings::default(),
        };
        if let Some(url) = api_url {
            settings.api_url = url.to_string();
        }
        debug!(api_url = %settings.api_url, web_host = %settings.web_host, "loaded settings");

        let client = GitHubClient::with_api_url(&settings.api_url)?;
        let pattern = UrlPattern::new(&settings.web_host)?;

        let store = match store_path {
            Some(path) => TomlStore::new(path),
            None => TomlStore::open_default()?,
        };

        Ok(Self {
            client,
            pattern,
            store,
        })
    }
}
