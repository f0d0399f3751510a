//! Persistence of the user's API key.
//!
//! The store only knows how to validate and move a key in and out of a
//! [`CredentialBackend`]; deciding what the UI does about it is the
//! reducer's job.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{Credential, CredentialError};

/// Name of the single persisted entry.
pub const STORAGE_KEY: &str = "gemini_api_key";

/// Capability over wherever the raw key lives.
pub trait CredentialBackend: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, raw: &str) -> Result<()>;
    fn remove(&self) -> Result<()>;
}

pub struct CredentialStore {
    backend: Box<dyn CredentialBackend>,
}

impl CredentialStore {
    pub fn new(backend: impl CredentialBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Persisted credential, if any. Read failures are logged and treated as
    /// no credential so startup falls through to the key prompt.
    pub fn load(&self) -> Option<Credential> {
        match self.backend.load() {
            Ok(raw) => raw.and_then(Credential::from_stored),
            Err(err) => {
                log::warn!("Failed to read stored API key: {err:#}");
                None
            }
        }
    }

    /// Validates, then persists the candidate verbatim.
    pub fn save(&self, candidate: &str) -> Result<Credential, CredentialError> {
        let credential = Credential::parse(candidate)?;
        self.backend
            .save(credential.expose())
            .map_err(|err| CredentialError::Storage(format!("{err:#}")))?;
        log::info!("Stored API key {}", credential.redacted());
        Ok(credential)
    }

    pub fn remove(&self) -> Result<(), CredentialError> {
        self.backend
            .remove()
            .map_err(|err| CredentialError::Removal(format!("{err:#}")))?;
        log::info!("Removed stored API key");
        Ok(())
    }
}

/// Process-local backend. Clones share one slot, which lets tests model a
/// reload as a fresh store over the same backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentialBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    pub fn peek(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl CredentialBackend for MemoryCredentialBackend {
    fn load(&self) -> Result<Option<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("credential slot poisoned"))?;
        Ok(slot.clone())
    }

    fn save(&self, raw: &str) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("credential slot poisoned"))?;
        *slot = Some(raw.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("credential slot poisoned"))?;
        *slot = None;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    gemini_api_key: Option<String>,
}

/// TOML file holding the single [`STORAGE_KEY`] entry.
#[derive(Debug, Clone)]
pub struct FileCredentialBackend {
    path: PathBuf,
}

impl FileCredentialBackend {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `credentials.toml` in the application data directory.
    pub fn default_location() -> Self {
        Self::at(super::app_config::app_data_dir().join("credentials.toml"))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CredentialBackend for FileCredentialBackend {
    fn load(&self) -> Result<Option<String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };
        let stored: StoredCredentials = toml::from_str(&contents)
            .with_context(|| format!("Malformed credentials file {}", self.path.display()))?;
        Ok(stored.gemini_api_key)
    }

    fn save(&self, raw: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let stored = StoredCredentials {
            gemini_api_key: Some(raw.to_string()),
        };
        let contents = toml::to_string_pretty(&stored).context("Failed to encode credentials")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    fn remove(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to remove {}", self.path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_store(dir: &TempDir) -> (CredentialStore, PathBuf) {
        let path = dir.path().join("nested").join("credentials.toml");
        (CredentialStore::new(FileCredentialBackend::at(&path)), path)
    }

    #[test]
    fn invalid_candidates_are_never_persisted() {
        let backend = MemoryCredentialBackend::new();
        let store = CredentialStore::new(backend.clone());

        assert_eq!(store.save("   "), Err(CredentialError::Empty));
        assert_eq!(store.save("sk-live-123"), Err(CredentialError::InvalidFormat));
        assert_eq!(backend.peek(), None);
    }

    #[test]
    fn saved_key_survives_a_fresh_store() {
        let dir = TempDir::new().unwrap();
        let (store, path) = file_store(&dir);

        let saved = store.save("AIzaSyTEST").unwrap();
        assert_eq!(saved.expose(), "AIzaSyTEST");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains(STORAGE_KEY));

        let (fresh, _) = file_store(&dir);
        assert_eq!(fresh.load(), Some(saved));
    }

    #[test]
    fn remove_then_load_is_absent() {
        let dir = TempDir::new().unwrap();
        let (store, path) = file_store(&dir);
        store.save("AIzaSyTEST").unwrap();

        store.remove().unwrap();
        assert!(!path.exists());

        let (fresh, _) = file_store(&dir);
        assert_eq!(fresh.load(), None);
        // Removing twice is fine.
        fresh.remove().unwrap();
    }

    #[test]
    fn failed_delete_is_a_removal_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::create_dir_all(&path).unwrap();
        let store = CredentialStore::new(FileCredentialBackend::at(&path));

        assert!(matches!(store.remove(), Err(CredentialError::Removal(_))));
    }

    #[test]
    fn unreadable_file_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        let (store, path) = file_store(&dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "gemini_api_key = [not toml").unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn empty_stored_entry_is_absent() {
        let store = CredentialStore::new(MemoryCredentialBackend::with_value(""));
        assert_eq!(store.load(), None);
    }
}
