//! Token persistence for signon-core.
//!
//! The session store holds the single credential token that survives
//! process restarts. [`FileTokenStore`] keeps it in a permission-restricted
//! file; [`MemoryTokenStore`] backs tests and embedders that handle
//! persistence themselves.

use std::fs::{self, Permissions};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::Result;

/// Durable storage for the credential token.
///
/// At most one token exists at a time; a write replaces whatever was
/// stored before. A `read` immediately after a `write` in the same task
/// observes the written value.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    async fn read(&self) -> Result<Option<String>>;

    /// Persist a token, replacing any previous one.
    async fn write(&self, token: &str) -> Result<()>;

    /// Remove the persisted token. Clearing an absent token is a success.
    async fn clear(&self) -> Result<()>;
}

/// Token store backed by a single file with 0600 permissions.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at the given path. The file and its parent
    /// directories are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let token = raw.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(token.to_string()))
    }

    async fn write(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        // Token file must only be readable by the owner
        fs::set_permissions(&self.path, Permissions::from_mode(0o600))?;
        debug!("token written to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("token file {} removed", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store for tests and embedders that persist elsewhere.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn read(&self) -> Result<Option<String>> {
        Ok(self.token.lock().await.clone())
    }

    async fn write(&self, token: &str) -> Result<()> {
        *self.token.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.token.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        assert_eq!(store.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        // Parent directories are created on demand
        let store = FileTokenStore::new(dir.path().join("nested/dir/token"));
        store.write("tok-abc123").await.unwrap();
        assert_eq!(store.read().await.unwrap(), Some("tok-abc123".to_string()));
    }

    #[tokio::test]
    async fn test_write_restricts_permissions() {
        let dir = tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.write("tok-abc123").await.unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_read_trims_surrounding_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "  tok-abc123\n").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.read().await.unwrap(), Some("tok-abc123".to_string()));
    }

    #[tokio::test]
    async fn test_read_empty_file_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "\n").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_removes_file_and_tolerates_absence() {
        let dir = tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.write("tok-abc123").await.unwrap();

        store.clear().await.unwrap();
        assert_eq!(store.read().await.unwrap(), None);
        assert!(!store.path().exists());

        // Clearing again is still a success
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.read().await.unwrap(), None);

        store.write("tok-abc123").await.unwrap();
        assert_eq!(store.read().await.unwrap(), Some("tok-abc123".to_string()));

        store.clear().await.unwrap();
        assert_eq!(store.read().await.unwrap(), None);

        let seeded = MemoryTokenStore::with_token("tok-seed");
        assert_eq!(seeded.read().await.unwrap(), Some("tok-seed".to_string()));
    }
}
