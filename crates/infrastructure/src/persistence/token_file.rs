//! Session token persistence.
//!
//! Stores the session token in the platform-specific config directory:
//! - Linux/macOS: `~/.config/rekey/session.json`
//! - Windows: `%APPDATA%/rekey/session.json`

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use rekey_application::ports::{TokenStorage, TokenStorageError};

/// On-disk shape of the persisted session.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
}

/// File-backed implementation of the [`TokenStorage`] port.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Creates a storage rooted in the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStorageError::Unavailable`] if the config directory
    /// cannot be determined on this system.
    pub fn new() -> Result<Self, TokenStorageError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            TokenStorageError::Unavailable("no config directory on this system".to_string())
        })?;
        Ok(Self::with_path(
            config_dir.join("rekey").join("session.json"),
        ))
    }

    /// Creates a storage backed by an explicit file path.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn get(&self) -> Result<Option<String>, TokenStorageError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let persisted: PersistedSession = serde_json::from_slice(&content)
            .map_err(|e| TokenStorageError::Serialization(e.to_string()))?;
        Ok(Some(persisted.token))
    }

    async fn set(&self, token: &str) -> Result<(), TokenStorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let persisted = PersistedSession {
            token: token.to_string(),
        };
        let content = serde_json::to_vec_pretty(&persisted)
            .map_err(|e| TokenStorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, content).await?;
        Ok(())
    }

    async fn remove(&self) -> Result<(), TokenStorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            // Already gone; logout stays idempotent.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> FileTokenStorage {
        FileTokenStorage::with_path(dir.path().join("session.json"))
    }

    #[tokio::test]
    async fn test_get_on_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        assert!(storage.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.set("jwt-abc").await.unwrap();

        assert_eq!(storage.get().await.unwrap(), Some("jwt-abc".to_string()));
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_token() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.set("jwt-old").await.unwrap();
        storage.set("jwt-new").await.unwrap();

        assert_eq!(storage.get().await.unwrap(), Some("jwt-new".to_string()));
    }

    #[tokio::test]
    async fn test_set_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::with_path(dir.path().join("nested").join("session.json"));

        storage.set("jwt-abc").await.unwrap();

        assert_eq!(storage.get().await.unwrap(), Some("jwt-abc".to_string()));
    }

    #[tokio::test]
    async fn test_remove_evicts_token() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.set("jwt-abc").await.unwrap();
        storage.remove().await.unwrap();

        assert!(storage.get().await.unwrap().is_none());
        assert!(!storage.path().exists());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.remove().await.unwrap();
        storage.remove().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), b"not json").unwrap();

        let err = storage.get().await.unwrap_err();
        assert!(matches!(err, TokenStorageError::Serialization(_)));
    }
}
