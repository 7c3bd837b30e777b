//! Light/dark/system theme preference and the key-value store it lives in.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::ServiceResult;

pub const THEME_KEY: &str = "theme";

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// The theme actually applied once `System` is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppliedTheme {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn resolve(&self, system_prefers_dark: bool) -> AppliedTheme {
        match self {
            Self::Light => AppliedTheme::Light,
            Self::Dark => AppliedTheme::Dark,
            Self::System if system_prefers_dark => AppliedTheme::Dark,
            Self::System => AppliedTheme::Light,
        }
    }
}

/// String key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> ServiceResult<()>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ServiceResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept in a JSON object on disk. A missing or unreadable file
/// reads as empty.
#[derive(Clone, Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> HashMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed preferences at {}: {}", self.path.display(), e);
            HashMap::new()
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> ServiceResult<()> {
        let mut values = self.load();
        values.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, raw).map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    }
}

/// Reads and writes the theme preference through a [`PreferenceStore`].
#[derive(Clone, Debug, Default)]
pub struct ThemeManager<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored preference; missing or unrecognised values read as `System`.
    pub fn preference(&self) -> ThemePreference {
        match self.store.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                debug!("Unknown theme preference {:?}", raw);
                ThemePreference::System
            }),
            None => ThemePreference::System,
        }
    }

    pub fn set_preference(&mut self, preference: ThemePreference) -> ServiceResult<()> {
        self.store.set(THEME_KEY, &preference.to_string())
    }

    pub fn applied(&self, system_prefers_dark: bool) -> AppliedTheme {
        self.preference().resolve(system_prefers_dark)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
