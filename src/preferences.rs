//! Preference Store
//!
//! Username and alias map survive between sessions. They are keyed by a
//! session identity, read once when a session is built and written through
//! on every change.

use crate::commands::alias::AliasMap;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persisted per-identity preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub username: Option<String>,
    #[serde(rename = "aliasMap")]
    pub alias_map: AliasMap,
}

/// Storage backend for [`Preferences`]
pub trait PreferenceStore: Send {
    /// Preferences saved for `identity`, or `None` if nothing was saved yet
    fn load(&self, identity: &str) -> Result<Option<Preferences>>;

    /// Replace the preferences saved for `identity`
    fn save(&self, identity: &str, preferences: &Preferences) -> Result<()>;
}

/// Default location of the preference file
pub fn default_preferences_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("termfolio").join("preferences.json"))
}

/// A JSON file holding `{identity: {username, aliasMap}}`
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable preference file is moved before it is rewritten
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".bak");
        self.path.with_file_name(name)
    }

    fn read_all(&self) -> Result<BTreeMap<String, Preferences>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| Error::PreferenceLoadFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| Error::PreferenceLoadFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self, identity: &str) -> Result<Option<Preferences>> {
        Ok(self.read_all()?.remove(identity))
    }

    fn save(&self, identity: &str, preferences: &Preferences) -> Result<()> {
        let save_error = |reason: String| Error::PreferenceSaveFailed {
            path: self.path.clone(),
            reason,
        };

        // An unreadable file is moved aside so other identities can be recovered
        let mut all = match self.read_all() {
            Ok(all) => all,
            Err(e) => {
                let backup = self.backup_path();
                fs::rename(&self.path, &backup).map_err(|e| save_error(e.to_string()))?;
                warn!("{}; moved it to {}", e, backup.display());
                BTreeMap::new()
            }
        };
        all.insert(identity.to_string(), preferences.clone());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| save_error(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(&all).map_err(|e| save_error(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| save_error(e.to_string()))?;

        debug!("Saved preferences for '{}' to {}", identity, self.path.display());
        Ok(())
    }
}

/// Process-local store, used with `--no-persist` and in tests
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<BTreeMap<String, Preferences>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with preferences for one identity
    pub fn with_entry(identity: &str, preferences: Preferences) -> Self {
        let store = Self::default();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(identity.to_string(), preferences);
        }
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, identity: &str) -> Result<Option<Preferences>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| Error::Other("preference store lock poisoned".to_string()))?;
        Ok(entries.get(identity).cloned())
    }

    fn save(&self, identity: &str, preferences: &Preferences) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Other("preference store lock poisoned".to_string()))?;
        entries.insert(identity.to_string(), preferences.clone());
        Ok(())
    }
}
