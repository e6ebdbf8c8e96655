//! Persistence for configured bridges in `<config_dir>/hub-bridge/bridges.toml`.

use crate::error::{Error, Result};
use crate::types::{ConfigurationRecord, KEY_OWNER, KEY_PROJECT, KEY_TOKEN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name for hub-bridge files within the user config dir.
pub const APP_DIR: &str = "hub-bridge";

/// Filename for stored bridges.
const STORE_FILE: &str = "bridges.toml";

/// Flat key/value form of a bridge configuration.
pub type BridgeConfig = BTreeMap<String, String>;

/// Check that a stored configuration carries every required key.
///
/// Keys are checked in the order token, owner, project; the first absent one
/// is reported.
pub fn validate_config(conf: &BridgeConfig) -> Result<()> {
    for key in [KEY_TOKEN, KEY_OWNER, KEY_PROJECT] {
        if !conf.contains_key(key) {
            return Err(Error::MissingConfigurationKey(key.to_string()));
        }
    }
    Ok(())
}

impl From<&ConfigurationRecord> for BridgeConfig {
    fn from(record: &ConfigurationRecord) -> Self {
        Self::from([
            (KEY_TOKEN.to_string(), record.token.clone()),
            (KEY_OWNER.to_string(), record.owner.clone()),
            (KEY_PROJECT.to_string(), record.project.clone()),
        ])
    }
}

impl TryFrom<&BridgeConfig> for ConfigurationRecord {
    type Error = Error;

    fn try_from(conf: &BridgeConfig) -> Result<Self> {
        validate_config(conf)?;
        Ok(Self {
            token: conf[KEY_TOKEN].clone(),
            owner: conf[KEY_OWNER].clone(),
            project: conf[KEY_PROJECT].clone(),
        })
    }
}

/// Receiver of validated configuration records
pub trait ConfigStore {
    /// Store `record` under `name`, replacing any previous entry
    fn save(&self, name: &str, record: &ConfigurationRecord) -> Result<()>;

    /// Load and validate the bridge stored under `name`
    fn load(&self, name: &str) -> Result<Option<ConfigurationRecord>>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    bridges: BTreeMap<String, BridgeConfig>,
}

/// TOML file holding named bridges
#[derive(Debug, Clone)]
pub struct TomlStore {
    path: PathBuf,
}

/// Get path to the default store file.
pub fn default_store_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(STORE_FILE))
        .ok_or_else(|| Error::Store("could not determine config directory".to_string()))
}

impl TomlStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location
    pub fn open_default() -> Result<Self> {
        default_store_path().map(Self::new)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw entry for `name`, without validation
    pub fn entry(&self, name: &str) -> Result<Option<BridgeConfig>> {
        Ok(self.read()?.bridges.remove(name))
    }

    /// Names of all stored bridges
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.read()?.bridges.into_keys().collect())
    }

    fn read(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::Store(format!("failed to read {}: {e}", self.path.display())))?;

        toml::from_str(&content)
            .map_err(|e| Error::Store(format!("failed to parse {}: {e}", self.path.display())))
    }

    fn write(&self, file: &StoreFile) -> Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)
                .map_err(|e| Error::Store(format!("failed to create {}: {e}", dir.display())))?;
        }

        let content = toml::to_string_pretty(file)
            .map_err(|e| Error::Store(format!("failed to serialize bridges: {e}")))?;

        let content_with_header = format!(
            "# hub-bridge configuration\n# Auto-generated - manual edits may be overwritten\n\n{content}"
        );

        fs::write(&self.path, content_with_header)
            .map_err(|e| Error::Store(format!("failed to write {}: {e}", self.path.display())))
    }
}

impl ConfigStore for TomlStore {
    fn save(&self, name: &str, record: &ConfigurationRecord) -> Result<()> {
        let mut file = self.read()?;
        file.bridges.insert(name.to_string(), record.into());
        self.write(&file)?;
        debug!(name, path = %self.path.display(), "saved bridge");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<ConfigurationRecord>> {
        self.entry(name)?
            .as_ref()
            .map(ConfigurationRecord::try_from)
            .transpose()
    }
}
