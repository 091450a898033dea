//! Persisted API credential for the search console.
//!
//! A tiny JSON key-value file in the data directory. It is a convenience for
//! not retyping the key, not a secret store: the value is kept and sent in
//! plain text.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::app_dirs::AppPaths;

/// Storage key the credential is kept under.
pub const API_KEY_STORAGE_KEY: &str = "openai_api_key";

/// String key-value pairs persisted as one JSON object.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    path: PathBuf,
}

impl KeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store located in the application data directory.
    pub fn in_data_dir() -> Result<Self> {
        Ok(Self::new(AppPaths::resolve()?.credential_store()))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse {}", self.path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", self.path.display()))
            }
        }
    }
}

/// Load/save pair for the credential, invoked at start-up and on change.
///
/// Failures are logged and swallowed; the console keeps working without
/// persistence.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    store: Option<KeyValueStore>,
}

impl CredentialStore {
    pub fn new(store: KeyValueStore) -> Self {
        Self { store: Some(store) }
    }

    /// A store that never reads or writes anything.
    pub fn disabled() -> Self {
        Self { store: None }
    }

    /// Read the saved credential, or an empty string.
    pub fn load(&self) -> String {
        let Some(store) = &self.store else {
            return String::new();
        };
        match store.get(API_KEY_STORAGE_KEY) {
            Ok(value) => {
                tracing::debug!(found = value.is_some(), path = %store.path().display(), "loaded credential");
                value.unwrap_or_default()
            }
            Err(err) => {
                tracing::warn!("failed to load credential: {err:#}");
                String::new()
            }
        }
    }

    /// Persist `value`; empty values are not written.
    pub fn save(&self, value: &str) {
        let Some(store) = &self.store else {
            return;
        };
        if value.is_empty() {
            return;
        }
        if let Err(err) = store.set(API_KEY_STORAGE_KEY, value) {
            tracing::warn!("failed to save credential: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, KeyValueStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::new(dir.path().join("data").join("storage.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get(API_KEY_STORAGE_KEY).unwrap(), None);
        assert_eq!(CredentialStore::new(store).load(), "");
    }

    #[test]
    fn saved_credential_is_reloaded() {
        let (_dir, store) = temp_store();
        CredentialStore::new(store.clone()).save("sk-abc");
        assert_eq!(CredentialStore::new(store).load(), "sk-abc");
    }

    #[test]
    fn empty_value_does_not_overwrite() {
        let (_dir, store) = temp_store();
        let credentials = CredentialStore::new(store);
        credentials.save("sk-abc");
        credentials.save("");
        assert_eq!(credentials.load(), "sk-abc");
    }

    #[test]
    fn other_keys_survive_updates() {
        let (_dir, store) = temp_store();
        store.set("theme", "light").unwrap();
        store.set(API_KEY_STORAGE_KEY, "sk-1").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn corrupt_file_loads_as_empty_credential() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();
        assert!(store.get(API_KEY_STORAGE_KEY).is_err());
        assert_eq!(CredentialStore::new(store).load(), "");
    }

    #[test]
    fn disabled_store_is_inert() {
        let credentials = CredentialStore::disabled();
        credentials.save("sk-abc");
        assert_eq!(credentials.load(), "");
    }
}
