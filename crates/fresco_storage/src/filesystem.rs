//! Filesystem-based blob store implementation.
//!
//! Blobs land in a fan-out directory structure under their storage key, with
//! a SHA-256 sidecar so reads can detect on-disk corruption.

use crate::BlobStore;
use fresco_error::{FrescoResult, StorageError, StorageErrorKind};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Filesystem blob store.
///
/// Stores blobs in a key-addressed structure:
/// `{base_path}/{key[0:2]}/{key[2:4]}/{key}`
///
/// # Example Structure
///
/// ```text
/// /var/fresco/media/
/// ├── ab/
/// │   └── cd/
/// │       ├── abcd5678...                 (original)
/// │       ├── abcd5678....sha256
/// │       ├── abcd5678..._thumb_medium    (derivative)
/// │       └── abcd5678..._thumb_medium.sha256
/// ```
///
/// # Features
///
/// - **Atomic writes**: temp file + rename
/// - **Integrity sidecars**: SHA-256 recorded at write, verified on read
/// - **Fan-out**: two-level subdirectories prevent directory bloat
pub struct FileSystemBlobStore {
    base_path: PathBuf,
}

impl FileSystemBlobStore {
    /// Create a new filesystem blob store.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> FrescoResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem blob store");
        Ok(Self { base_path })
    }

    /// Compute SHA-256 hash of data.
    fn compute_hash(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    /// Reject keys that cannot serve as a single path component.
    ///
    /// Keys are random hex plus an optional `_variant` suffix, so anything
    /// outside lowercase alphanumerics and underscores is refused before it
    /// reaches the filesystem.
    fn check_key(key: &str) -> FrescoResult<()> {
        // Fan-out indexes the first four characters
        let valid = key.len() >= 4
            && key.len() <= 64
            && key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(StorageError::new(StorageErrorKind::InvalidKey(key.to_string())).into())
        }
    }

    /// Filesystem path for a key: `{base}/{key[0:2]}/{key[2:4]}/{key}`.
    fn blob_path(&self, key: &str) -> PathBuf {
        self.base_path.join(&key[0..2]).join(&key[2..4]).join(key)
    }

    fn sidecar_path(&self, key: &str) -> PathBuf {
        let mut path = self.blob_path(key).into_os_string();
        path.push(".sha256");
        PathBuf::from(path)
    }

    /// Write bytes atomically via a temp file in the same directory.
    async fn write_atomic(path: &PathBuf, data: &[u8]) -> FrescoResult<()> {
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl BlobStore for FileSystemBlobStore {
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    async fn put(&self, key: &str, data: &[u8]) -> FrescoResult<()> {
        Self::check_key(key)?;
        let path = self.blob_path(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let hash = Self::compute_hash(data);
        Self::write_atomic(&path, data).await?;
        Self::write_atomic(&self.sidecar_path(key), hash.as_bytes()).await?;

        tracing::info!(
            key,
            hash = %hash,
            size = data.len(),
            "Stored blob"
        );
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> FrescoResult<Vec<u8>> {
        Self::check_key(key)?;
        let path = self.blob_path(key);

        let data = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(key.to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        // Verify against the recorded hash when the sidecar survives
        if let Ok(expected) = tokio::fs::read_to_string(self.sidecar_path(key)).await {
            let actual = Self::compute_hash(&data);
            if actual != expected.trim() {
                return Err(StorageError::new(StorageErrorKind::HashMismatch(
                    expected.trim().to_string(),
                    actual,
                ))
                .into());
            }
        }

        tracing::debug!(key, size = data.len(), "Retrieved blob");
        Ok(data)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, key: &str) -> FrescoResult<()> {
        Self::check_key(key)?;

        for path in [self.blob_path(key), self.sidecar_path(key)] {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                // Idempotent: a missing blob is already deleted
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                        "delete {}: {}",
                        path.display(),
                        e
                    )))
                    .into());
                }
            }
        }

        tracing::info!(key, "Deleted blob");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn exists(&self, key: &str) -> FrescoResult<bool> {
        Self::check_key(key)?;
        Ok(tokio::fs::try_exists(self.blob_path(key)).await.unwrap_or(false))
    }
}
