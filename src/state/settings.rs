// Settings persistence module
// Saves and loads the workspace's last tab and last output

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Error types for settings persistence
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// File I/O error
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable workspace settings
/// Serialized as a flat object with two fixed keys
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersistedSettings {
    /// Id of the last selected agent tab (empty = not set)
    #[serde(rename = "esg_active_tab", default)]
    pub active_tab: String,
    /// Last rendered agent output
    #[serde(rename = "esg_agent_output", default)]
    pub agent_output: String,
}

/// Backing store for [`PersistedSettings`]
///
/// The workspace receives a store at construction, reads it once and writes
/// through it on every change.
pub trait SettingsStore: Send {
    /// Load settings, returning defaults when nothing has been stored yet
    fn load(&self) -> Result<PersistedSettings, PersistenceError>;

    /// Replace the stored settings
    fn save(&self, settings: &PersistedSettings) -> Result<(), PersistenceError>;
}

/// JSON file backed settings store
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default location of the settings file
    /// Returns a path in the user's home directory or current directory
    pub fn default_path() -> PathBuf {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push(".esg-workspace");
            path.push("settings.json");
            path
        } else {
            PathBuf::from("settings.json")
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<PersistedSettings, PersistenceError> {
        if !self.path.exists() {
            return Ok(PersistedSettings::default());
        }

        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&self, settings: &PersistedSettings) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory settings store, shared by clones of the same handle
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    inner: Mutex<PersistedSettings>,
}

impl MemorySettingsStore {
    pub fn new(settings: PersistedSettings) -> Self {
        Self {
            inner: Mutex::new(settings),
        }
    }

    /// Current stored value
    pub fn snapshot(&self) -> PersistedSettings {
        match self.inner.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<PersistedSettings, PersistenceError> {
        Ok(self.snapshot())
    }

    fn save(&self, settings: &PersistedSettings) -> Result<(), PersistenceError> {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = settings.clone();
        Ok(())
    }
}

impl<S: SettingsStore + Sync + ?Sized> SettingsStore for std::sync::Arc<S> {
    fn load(&self) -> Result<PersistedSettings, PersistenceError> {
        (**self).load()
    }

    fn save(&self, settings: &PersistedSettings) -> Result<(), PersistenceError> {
        (**self).save(settings)
    }
}
