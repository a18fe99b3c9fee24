//! The photo lifecycle manager.

use crate::update::guard_update;
use crate::{
    AlbumDirectory, PhotoRecord, PhotoRepository, PhotoUpdate, ProfileImageLinkCleaner,
    ProfileStore,
};
use fresco_core::{AlbumId, PersonRef, PhotoId};
use fresco_error::{FrescoResult, PhotoError, PhotoErrorKind};
use fresco_storage::AttachmentStore;
use std::sync::Arc;

/// Drives a photo through its lifecycle: upload, guarded mutation, remote
/// fetch completion, and the destroy cascade.
///
/// Each store operation is a single unit of work: it either fully commits
/// (record present with all derivatives) or fully fails (no record, no
/// bytes persisted).
pub struct PhotoManager {
    attachments: Arc<AttachmentStore>,
    albums: Arc<dyn AlbumDirectory>,
    repository: PhotoRepository,
    cleaner: ProfileImageLinkCleaner,
}

impl PhotoManager {
    /// Create a manager over the storage, album, and profile boundaries.
    pub fn new(
        attachments: Arc<AttachmentStore>,
        albums: Arc<dyn AlbumDirectory>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            attachments,
            albums,
            repository: PhotoRepository::new(),
            cleaner: ProfileImageLinkCleaner::new(profiles),
        }
    }

    /// The repository backing this manager.
    pub fn repository(&self) -> &PhotoRepository {
        &self.repository
    }

    /// The attachment store backing this manager.
    pub fn attachments(&self) -> &Arc<AttachmentStore> {
        &self.attachments
    }

    /// Check that the album exists and belongs to the given person.
    async fn check_album(&self, owner: &PersonRef, album: &AlbumId) -> FrescoResult<()> {
        match self.albums.album_owner(album).await? {
            Some(album_owner) if album_owner == owner.id => Ok(()),
            _ => Err(PhotoError::new(PhotoErrorKind::AlbumOwnerMismatch(album.to_string())).into()),
        }
    }

    /// Validate, store, and record a local upload.
    ///
    /// `owner` comes from the authenticated upload path and is fixed for the
    /// record's lifetime from here on.
    #[tracing::instrument(skip(self, owner, caption, data, filename), fields(owner = %owner.handle, size = data.len()))]
    pub async fn create_from_upload(
        &self,
        owner: PersonRef,
        album: AlbumId,
        caption: Option<String>,
        data: &[u8],
        declared: &str,
        filename: &str,
    ) -> FrescoResult<PhotoRecord> {
        self.check_album(&owner, &album).await?;

        let stored = self.attachments.store(data, declared, filename).await?;
        let record = PhotoRecord::from_upload(owner, album, caption, &stored);

        tracing::info!(photo_id = %record.id(), "Created photo record");
        self.repository.insert(record.clone()).await;
        Ok(record)
    }

    /// Insert a record constructed elsewhere (the federation ingestion path).
    pub async fn adopt(&self, record: PhotoRecord) -> PhotoRecord {
        self.repository.insert(record.clone()).await;
        record
    }

    /// Apply an external field map to a record.
    ///
    /// Protected fields are dropped by the guard; the update itself is
    /// serialized against other updates to the same record.
    pub async fn apply_update(
        &self,
        id: PhotoId,
        update: PhotoUpdate,
    ) -> FrescoResult<PhotoRecord> {
        self.repository
            .mutate(&id, |record| guard_update(record, &update))
            .await
    }

    /// Store fetched bytes for a PendingRemote record and resolve it.
    #[tracing::instrument(skip(self, data), fields(photo_id = %id, size = data.len()))]
    pub async fn complete_remote_fetch(
        &self,
        id: PhotoId,
        data: &[u8],
        declared: &str,
    ) -> FrescoResult<PhotoRecord> {
        let record = self
            .repository
            .get(&id)
            .await
            .ok_or_else(|| PhotoError::new(PhotoErrorKind::NotFound(id.to_string())))?;
        if !record.pending_remote() {
            return Err(PhotoError::new(PhotoErrorKind::NotPendingRemote(id.to_string())).into());
        }

        // Remote fetches carry no trustworthy filename; none is needed
        let stored = self.attachments.store(data, declared, "").await?;
        self.repository
            .mutate(&id, |record| record.resolve_with(&stored))
            .await
    }

    /// Snapshot of a record.
    pub async fn get(&self, id: &PhotoId) -> Option<PhotoRecord> {
        self.repository.get(id).await
    }

    /// Destroy a record: delete its blobs, clear any profile link pointing
    /// at it, and drop it from the repository.
    ///
    /// Destroying an id with no record is a no-op. Profile cleanup completes
    /// before this call returns, so no caller observes a dangling reference.
    #[tracing::instrument(skip(self), fields(photo_id = %id))]
    pub async fn destroy(&self, id: PhotoId) -> FrescoResult<()> {
        let Some(record) = self.repository.get(&id).await else {
            tracing::debug!("Destroy of missing record is a no-op");
            return Ok(());
        };

        if let Some(key) = record.storage_key() {
            self.attachments.delete(key).await?;
        }
        self.cleaner.on_destroy(&record).await?;
        self.repository.remove(&id).await;

        tracing::info!("Destroyed photo record");
        Ok(())
    }
}
