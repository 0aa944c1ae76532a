// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{City, Genre};

/// Storage key of the selected city name.
pub const KEY_USER_CITY: &str = "furahiDayUserCity";

/// Storage key of the selected interests, a JSON array of genre names.
pub const KEY_USER_INTERESTS: &str = "furahiDayUserInterests";

/// The city and interests chosen during onboarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreferences {
    pub city: City,
    pub interests: BTreeSet<Genre>,
}

/// Errors raised by a preference store.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed preference data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable string key-value storage.
pub trait PreferenceStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str);
}

/// Reads saved preferences, `None` means the user still has to onboard.
///
/// Missing or malformed entries are logged and treated as absent.
pub fn load_preferences(store: &impl PreferenceStore) -> Option<UserPreferences> {
    let (Some(city), Some(interests)) = (store.get(KEY_USER_CITY), store.get(KEY_USER_INTERESTS))
    else {
        tracing::debug!("no saved preferences, onboarding required");
        return None;
    };

    let Ok(city) = city.parse::<City>() else {
        tracing::warn!(city = %city, "failed to load user preferences: unknown city");
        return None;
    };

    let interests: Vec<Genre> = match serde_json::from_str(&interests) {
        Ok(a) => a,
        Err(err) => {
            tracing::warn!(%err, "failed to load user preferences: malformed interests");
            return None;
        }
    };

    Some(UserPreferences {
        city,
        interests: interests.into_iter().collect(),
    })
}

/// Writes preferences as two independent values.
pub fn save_preferences(store: &mut impl PreferenceStore, prefs: &UserPreferences) {
    store.set(KEY_USER_CITY, prefs.city.as_ref());

    let interests: Vec<&Genre> = prefs.interests.iter().collect();
    match serde_json::to_string(&interests) {
        Ok(json) => store.set(KEY_USER_INTERESTS, &json),
        Err(err) => tracing::error!(%err, "failed to save user preferences"),
    }
}

/// In-memory store, nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Store backed by a JSON object in a file.
///
/// Values are kept in memory, [`FilePreferenceStore::flush`] writes them back.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
    dirty: bool,
}

impl FilePreferenceStore {
    /// File name of the store inside the state directory.
    pub const FILE_NAME: &str = "preferences.json";

    /// Opens the store at `path`, a missing file reads as empty.
    #[tracing::instrument]
    pub async fn open(path: &Path) -> Result<Self, PreferenceError> {
        let values = match fs::read_to_string(path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        Ok(Self {
            path: path.to_owned(),
            values,
            dirty: false,
        })
    }

    /// Opens the store, discarding a malformed file instead of failing.
    pub async fn open_or_reset(path: &Path) -> Result<Self, PreferenceError> {
        match Self::open(path).await {
            Err(PreferenceError::Malformed(err)) => {
                tracing::warn!(path = %path.display(), %err, "discarding malformed preferences");
                Ok(Self {
                    path: path.to_owned(),
                    values: BTreeMap::new(),
                    dirty: false,
                })
            }
            other => other,
        }
    }

    /// Writes pending changes to disk.
    pub async fn flush(&mut self) -> Result<(), PreferenceError> {
        if !self.dirty {
            return Ok(());
        }

        let io_err = |source| PreferenceError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content).await.map_err(io_err)?;
        self.dirty = false;
        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.dirty = true;
    }
}
