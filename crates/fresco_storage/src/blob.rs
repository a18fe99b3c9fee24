//! Blob store trait definition.

use fresco_error::FrescoResult;

/// Trait for pluggable blob storage backends.
///
/// Implementations handle the raw bytes only; which keys exist and what they
/// mean is the [`AttachmentStore`](crate::AttachmentStore)'s business. Keys
/// are caller-supplied opaque tokens with no filename semantics.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes under a key.
    ///
    /// Writing the same key twice replaces the previous content.
    ///
    /// # Arguments
    ///
    /// * `key` - Opaque storage key, a single path-safe token
    /// * `data` - The bytes to persist
    async fn put(&self, key: &str, data: &[u8]) -> FrescoResult<()>;

    /// Retrieve bytes by key.
    ///
    /// Returns the bytes exactly as stored.
    async fn get(&self, key: &str) -> FrescoResult<Vec<u8>>;

    /// Delete the blob under a key.
    ///
    /// Deleting a key that does not exist is a no-op, not an error.
    async fn delete(&self, key: &str) -> FrescoResult<()>;

    /// Check if a blob exists.
    async fn exists(&self, key: &str) -> FrescoResult<bool>;
}
