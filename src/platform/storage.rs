//! Preference storage
//!
//! Small typed key-value store for settings. Values are kept in memory and
//! only reach the backing medium on `flush`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistError;

/// Preferences file name inside the data directory
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// A single stored preference value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Int(i32),
    Float(f32),
    Str(String),
}

/// Platform preference area: typed getters with caller-supplied defaults.
///
/// A getter returns the default when the key is missing or holds another
/// type. Setters only touch memory; call `flush` to persist.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<&PrefValue>;

    fn set(&mut self, key: &str, value: PrefValue);

    fn delete_key(&mut self, key: &str);

    /// Write all pending changes to the backing medium
    fn flush(&mut self) -> Result<(), PersistError>;

    fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.get(key) {
            Some(PrefValue::Float(v)) => *v,
            // Integral floats written by hand come back as ints
            Some(PrefValue::Int(v)) => *v as f32,
            _ => default,
        }
    }

    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            Some(PrefValue::Int(v)) => *v,
            _ => default,
        }
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(PrefValue::Str(v)) => v.clone(),
            _ => default.to_string(),
        }
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.set(key, PrefValue::Float(value));
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.set(key, PrefValue::Int(value));
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, PrefValue::Str(value.to_string()));
    }
}

/// In-process preferences (nothing survives the process)
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PrefValue>,
    flushes: usize,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `flush` calls so far
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }

    fn delete_key(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn flush(&mut self) -> Result<(), PersistError> {
        self.flushes += 1;
        Ok(())
    }
}

/// One entry of the preferences file as written by `flush`
#[derive(Serialize)]
#[serde(untagged)]
enum StoredEntry<'a> {
    Pref(&'a PrefValue),
    Foreign(&'a serde_json::Value),
}

/// Preferences persisted as a JSON object (sorted keys) in a single file.
///
/// Entries whose value is not an int, float or string (written by another
/// tool, say) are kept aside untouched and written back on flush.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
    foreign: BTreeMap<String, serde_json::Value>,
}

impl FilePreferences {
    /// Open the preferences file inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::open(data_dir.join(PREFERENCES_FILE_NAME))
    }

    /// Open a preferences file. A missing, unreadable or non-object file
    /// yields an empty store; the file is (re)created on the next flush.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut prefs = Self {
            path,
            values: BTreeMap::new(),
            foreign: BTreeMap::new(),
        };

        let raw: BTreeMap<String, serde_json::Value> = match fs::read_to_string(&prefs.path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("Ignoring malformed preferences {}: {}", prefs.path.display(), e);
                    return prefs;
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No preferences file yet, using defaults");
                return prefs;
            }
            Err(e) => {
                log::warn!("Cannot read preferences {}: {}", prefs.path.display(), e);
                return prefs;
            }
        };

        for (key, value) in raw {
            match serde_json::from_value::<PrefValue>(value.clone()) {
                Ok(pref) => {
                    prefs.values.insert(key, pref);
                }
                Err(_) => {
                    log::warn!("Preference '{}' has an unsupported value, leaving it as is", key);
                    prefs.foreign.insert(key, value);
                }
            }
        }
        log::info!("Loaded preferences from {}", prefs.path.display());
        prefs
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.foreign.remove(key);
        self.values.insert(key.to_string(), value);
    }

    fn delete_key(&mut self, key: &str) {
        self.foreign.remove(key);
        self.values.remove(key);
    }

    fn flush(&mut self) -> Result<(), PersistError> {
        let mut out: BTreeMap<&str, StoredEntry<'_>> = self
            .foreign
            .iter()
            .map(|(key, value)| (key.as_str(), StoredEntry::Foreign(value)))
            .collect();
        for (key, value) in &self.values {
            out.insert(key.as_str(), StoredEntry::Pref(value));
        }
        let json = serde_json::to_string_pretty(&out)?;
        fs::write(&self.path, json).map_err(|e| PersistError::io(&self.path, e))?;
        log::debug!("Preferences flushed ({} keys)", out.len());
        Ok(())
    }
}
