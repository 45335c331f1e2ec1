//! Configuration store persistence.
//!
//! The store is one JSON file holding launch configurations keyed by the
//! directory lazy-typer was invoked from. Older releases wrote a single
//! configuration object instead; that shape is still read and becomes the
//! global profile, and is rewritten in the keyed shape on the next save.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use super::types::Config;
use crate::utils::{resolve_storage_location, STORE_FILE_NAME};

/// Store key reserved for the global (legacy) profile.
pub const GLOBAL_PROFILE_KEY: &str = "global";

/// Identifies one profile in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileKey {
    /// The single profile of the legacy store.
    Global,
    /// Profile for an invocation directory (absolute path).
    Directory(PathBuf),
}

impl ProfileKey {
    /// Key string used in the store file.
    pub fn store_key(&self) -> String {
        match self {
            ProfileKey::Global => GLOBAL_PROFILE_KEY.to_string(),
            ProfileKey::Directory(dir) => dir.to_string_lossy().into_owned(),
        }
    }
}

impl fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileKey::Global => write!(f, "global profile"),
            ProfileKey::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Result of a clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Something was removed.
    Cleared,
    /// The store or the profile did not exist.
    NothingToClear,
}

/// On-disk shapes of the store, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSchema {
    /// v1: a single configuration object.
    Legacy(Config),
    /// v2: profile key -> raw configuration object.
    ///
    /// Profiles stay undecoded so that one invalid entry does not hide the
    /// others, and is written back unchanged.
    Profiles(BTreeMap<String, Value>),
}

impl StoreSchema {
    /// Detect the shape of a store document and parse it.
    ///
    /// A document with a top-level `folders` field is a legacy single
    /// configuration; anything else must be an object of profiles.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(content)?;

        if value.get("folders").is_some() {
            Ok(StoreSchema::Legacy(serde_json::from_value(value)?))
        } else {
            Ok(StoreSchema::Profiles(serde_json::from_value(value)?))
        }
    }

    /// Migrate to the current shape, keeping entries undecoded.
    pub fn into_entries(self) -> serde_json::Result<BTreeMap<String, Value>> {
        match self {
            StoreSchema::Legacy(config) => Ok(BTreeMap::from([(
                GLOBAL_PROFILE_KEY.to_string(),
                serde_json::to_value(config)?,
            )])),
            StoreSchema::Profiles(entries) => Ok(entries),
        }
    }
}

/// Decode one stored profile. Invalid entries are logged and read as absent.
fn decode_profile(key: &str, value: &Value) -> Option<Config> {
    match Config::deserialize(value) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring invalid profile '{}' in config file: {}", key, e);
            None
        }
    }
}

/// Persistent configuration store.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Use the store file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store in the platform config directory, creating the
    /// directory if needed.
    pub fn open_default() -> Result<Self> {
        let dir = resolve_storage_location().context("Could not prepare config directory")?;
        Ok(Self::new(dir.join(STORE_FILE_NAME)))
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    /// Read the store as it is on disk.
    ///
    /// Returns `None` when the file is missing. A file that is not valid
    /// JSON, or not one of the known shapes, is moved aside to
    /// `config.json.bak` and also reads as `None`.
    pub fn read_schema(&self) -> Result<Option<StoreSchema>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config file {}", self.path.display())
                })
            }
        };

        match StoreSchema::parse(&content) {
            Ok(schema) => Ok(Some(schema)),
            Err(e) => {
                tracing::warn!(
                    "Config file {} is corrupt, backing up and starting fresh: {}",
                    self.path.display(),
                    e
                );
                let backup = self.backup_path();
                if let Err(backup_err) = fs::rename(&self.path, &backup) {
                    tracing::warn!("Failed to back up corrupt config file: {}", backup_err);
                }
                Ok(None)
            }
        }
    }

    /// Whether the file on disk still has the single-configuration shape.
    pub fn holds_legacy(&self) -> Result<bool> {
        Ok(matches!(self.read_schema()?, Some(StoreSchema::Legacy(_))))
    }

    fn entries(&self) -> Result<BTreeMap<String, Value>> {
        match self.read_schema()? {
            Some(schema) => schema
                .into_entries()
                .context("Failed to convert legacy configuration"),
            None => Ok(BTreeMap::new()),
        }
    }

    fn write(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize configuration")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config to {}", self.path.display()))?;

        Ok(())
    }

    fn remove_file(&self) -> Result<ClearOutcome> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(ClearOutcome::Cleared),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ClearOutcome::NothingToClear),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove config file {}", self.path.display())),
        }
    }

    /// Load the configuration for a profile.
    ///
    /// An entry that does not decode is reported and reads as `None`.
    pub fn load(&self, key: &ProfileKey) -> Result<Option<Config>> {
        let store_key = key.store_key();
        Ok(self
            .entries()?
            .get(&store_key)
            .and_then(|value| decode_profile(&store_key, value)))
    }

    /// Save a profile, keeping every other entry in the store as it is.
    pub fn save(&self, key: &ProfileKey, config: &Config) -> Result<()> {
        let mut entries = self.entries()?;
        let value = serde_json::to_value(config).context("Failed to serialize configuration")?;
        entries.insert(key.store_key(), value);
        tracing::debug!(profile = %key, path = %self.path.display(), "Saving configuration");
        self.write(&entries)
    }

    /// Remove one profile. The file is deleted once no profile is left.
    pub fn clear(&self, key: &ProfileKey) -> Result<ClearOutcome> {
        let mut entries = self.entries()?;
        if entries.remove(&key.store_key()).is_none() {
            return Ok(ClearOutcome::NothingToClear);
        }

        if entries.is_empty() {
            self.remove_file()?;
        } else {
            self.write(&entries)?;
        }
        Ok(ClearOutcome::Cleared)
    }

    /// Delete the whole store.
    pub fn clear_all(&self) -> Result<ClearOutcome> {
        self.remove_file()
    }

    /// Move the global profile to `key` when `key` has no profile yet.
    ///
    /// This is how a store written by an older release is carried over to
    /// the first directory lazy-typer runs in afterwards. An invalid global
    /// profile is left where it is.
    pub fn adopt_legacy(&self, key: &ProfileKey) -> Result<Option<Config>> {
        if *key == ProfileKey::Global {
            return self.load(key);
        }

        let mut entries = self.entries()?;
        if entries.contains_key(&key.store_key()) {
            return Ok(None);
        }
        let Some(config) = entries
            .get(GLOBAL_PROFILE_KEY)
            .and_then(|value| decode_profile(GLOBAL_PROFILE_KEY, value))
        else {
            return Ok(None);
        };

        tracing::info!(profile = %key, "Migrating global configuration");
        if let Some(value) = entries.remove(GLOBAL_PROFILE_KEY) {
            entries.insert(key.store_key(), value);
        }
        self.write(&entries)?;
        Ok(Some(config))
    }
}
