//! The attachment store: validate, persist, render, resolve.

use crate::{BlobStore, DerivativeRenderer, StorageConfig, WhitelistValidator};
use derive_getters::Getters;
use fresco_core::{ContentType, StorageKey, Variant};
use fresco_error::{FrescoResult, StorageError, StorageErrorKind};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

/// Result of a successful store: the random key plus everything a photo
/// record needs to resolve its bytes later.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StoredAttachment {
    /// Random storage key of the original
    key: StorageKey,
    /// Content type established by validation
    content_type: ContentType,
    /// SHA-256 of the original bytes
    content_hash: String,
    /// Variant name to resolvable URL, including the original under `full`
    derivatives: BTreeMap<Variant, String>,
}

/// Orchestrates the upload path: whitelist validation, random key
/// generation, original + derivative persistence, and URL resolution.
///
/// A store operation is all-or-nothing: if rendering or persisting any
/// derivative fails, every blob written for the attempt is removed before
/// the error is returned, so no partially-rendered attachment is ever
/// observable.
pub struct AttachmentStore {
    blobs: Arc<dyn BlobStore>,
    renderer: Arc<dyn DerivativeRenderer>,
    validator: WhitelistValidator,
    config: StorageConfig,
}

impl AttachmentStore {
    /// Create an attachment store over a blob backend and a renderer.
    pub fn new(
        blobs: Arc<dyn BlobStore>,
        renderer: Arc<dyn DerivativeRenderer>,
        config: StorageConfig,
    ) -> Self {
        Self {
            blobs,
            renderer,
            validator: WhitelistValidator::new(),
            config,
        }
    }

    /// The storage configuration in effect.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Bound an external call by the configured deadline.
    ///
    /// A timeout surfaces as a retryable `Unavailable` error rather than a
    /// hang.
    async fn bounded<T>(
        &self,
        what: &str,
        fut: impl Future<Output = FrescoResult<T>>,
    ) -> FrescoResult<T> {
        match tokio::time::timeout(self.config.timeout(), fut).await {
            Ok(result) => result,
            Err(_) => Err(StorageError::new(StorageErrorKind::Unavailable(format!(
                "{} exceeded {}s deadline",
                what, self.config.timeout_secs
            )))
            .into()),
        }
    }

    /// Remove blobs written by a failed store attempt, best effort.
    async fn unwind(&self, written: &[String]) {
        for key in written {
            if let Err(e) = self.blobs.delete(key).await {
                tracing::warn!(key = key.as_str(), error = %e, "Failed to unwind partial store");
            }
        }
    }

    /// Store an upload and render its derivatives.
    ///
    /// Ordered steps: validate the declared type against the byte sample,
    /// generate a random storage key, persist the original, render and
    /// persist each configured variant, and return the variant → URL map.
    /// The original filename is accepted for logging only and never
    /// influences keys or URLs.
    ///
    /// # Errors
    ///
    /// - Validation failures reject the upload with nothing persisted
    /// - Backend or renderer failures after validation unwind every blob
    ///   written by this attempt before returning
    #[tracing::instrument(skip(self, data, filename), fields(size = data.len()))]
    pub async fn store(
        &self,
        data: &[u8],
        declared: &str,
        filename: &str,
    ) -> FrescoResult<StoredAttachment> {
        // Validation gates the whole operation; no byte is written before it
        let content_type = self.validator.validate(declared, data)?;

        let key = StorageKey::generate();
        let mut written: Vec<String> = Vec::new();

        let original_key = key.variant_key(Variant::Full);
        if let Err(e) = self
            .bounded("store original", self.blobs.put(&original_key, data))
            .await
        {
            self.unwind(&written).await;
            return Err(e);
        }
        written.push(original_key);

        let mut derivatives = BTreeMap::new();
        derivatives.insert(Variant::Full, self.url_for(&key, Variant::Full));

        for spec in self.config.variant_specs() {
            let rendered = match self
                .bounded("render derivative", self.renderer.render(data, &spec))
                .await
            {
                Ok(bytes) => bytes,
                Err(e) => {
                    self.unwind(&written).await;
                    return Err(StorageError::new(StorageErrorKind::RenderFailed(
                        spec.variant.as_str().to_string(),
                        e.to_string(),
                    ))
                    .into());
                }
            };

            let variant_key = key.variant_key(spec.variant);
            if let Err(e) = self
                .bounded("store derivative", self.blobs.put(&variant_key, &rendered))
                .await
            {
                self.unwind(&written).await;
                return Err(e);
            }
            written.push(variant_key);
            derivatives.insert(spec.variant, self.url_for(&key, spec.variant));
        }

        let content_hash = {
            let mut hasher = Sha256::new();
            hasher.update(data);
            format!("{:x}", hasher.finalize())
        };

        tracing::info!(
            key = %key,
            content_type = %content_type,
            variants = derivatives.len(),
            "Stored attachment"
        );

        Ok(StoredAttachment {
            key,
            content_type,
            content_hash,
            derivatives,
        })
    }

    /// Read back the original bytes, exactly as stored.
    pub async fn read(&self, key: &StorageKey) -> FrescoResult<Vec<u8>> {
        self.read_variant(key, Variant::Full).await
    }

    /// Read back one variant's bytes, exactly as the renderer produced them.
    ///
    /// Derivatives are stored once at store time and never re-rendered here.
    pub async fn read_variant(&self, key: &StorageKey, variant: Variant) -> FrescoResult<Vec<u8>> {
        self.bounded("read blob", self.blobs.get(&key.variant_key(variant)))
            .await
    }

    /// Resolvable URL for one variant of a stored attachment.
    ///
    /// Built from the pod base URL and the random key, so the uploaded
    /// filename cannot appear in it by construction.
    pub fn url_for(&self, key: &StorageKey, variant: Variant) -> String {
        format!("{}/{}", self.config.base_url, key.variant_key(variant))
    }

    /// Whether the original blob for a key is present.
    pub async fn exists(&self, key: &StorageKey) -> FrescoResult<bool> {
        self.blobs.exists(&key.variant_key(Variant::Full)).await
    }

    /// Delete the original and every configured variant.
    ///
    /// Idempotent: deleting an already-deleted key is a no-op.
    #[tracing::instrument(skip(self), fields(key = %key))]
    pub async fn delete(&self, key: &StorageKey) -> FrescoResult<()> {
        self.bounded("delete original", self.blobs.delete(&key.variant_key(Variant::Full)))
            .await?;
        for spec in self.config.variant_specs() {
            self.bounded(
                "delete derivative",
                self.blobs.delete(&key.variant_key(spec.variant)),
            )
            .await?;
        }
        tracing::info!(key = %key, "Deleted attachment");
        Ok(())
    }
}
