//! Shared fixtures for federation tests: a receiving pod with a stub trust
//! layer.

use fresco_core::{AlbumId, FederationHandle, PersonId, PersonRef};
use fresco_error::FrescoResult;
use fresco_federation::{IngestionPipeline, SenderResolver};
use fresco_photos::{AlbumDirectory, PhotoManager, PhotoRecord, ProfileStore};
use fresco_storage::{
    AttachmentStore, DerivativeRenderer, FileSystemBlobStore, StorageConfig, VariantSpec,
};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

pub const BUTTON_PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR button bytes";

pub struct StubRenderer;

#[async_trait::async_trait]
impl DerivativeRenderer for StubRenderer {
    async fn render(&self, data: &[u8], spec: &VariantSpec) -> FrescoResult<Vec<u8>> {
        let mut out = data.to_vec();
        out.extend_from_slice(spec.variant.as_str().as_bytes());
        Ok(out)
    }
}

/// Profile store stub; federation tests never touch profiles.
struct NoProfiles;

#[async_trait::async_trait]
impl ProfileStore for NoProfiles {
    async fn image_url(&self, _person: &PersonId) -> FrescoResult<Option<String>> {
        Ok(None)
    }

    async fn set_image_url(&self, _person: &PersonId, _url: Option<String>) -> FrescoResult<()> {
        Ok(())
    }
}

/// Albums owned by whoever asks; creation-time checks are exercised in the
/// photos crate.
struct OpenAlbums;

#[async_trait::async_trait]
impl AlbumDirectory for OpenAlbums {
    async fn album_owner(&self, _album: &AlbumId) -> FrescoResult<Option<PersonId>> {
        Ok(None)
    }
}

/// Resolver stub over a fixed handle → person table.
pub struct FixedResolver {
    known: HashMap<FederationHandle, PersonRef>,
}

impl FixedResolver {
    pub fn trusting(handles: &[&str]) -> Self {
        let known = handles
            .iter()
            .map(|handle| {
                let handle = FederationHandle::new(*handle);
                let person = PersonRef::new(PersonId::generate(), handle.clone());
                (handle, person)
            })
            .collect();
        Self { known }
    }

    pub fn person_for(&self, handle: &str) -> Option<&PersonRef> {
        self.known.get(&FederationHandle::new(handle))
    }
}

#[async_trait::async_trait]
impl SenderResolver for FixedResolver {
    async fn resolve(&self, handle: &FederationHandle) -> FrescoResult<Option<PersonRef>> {
        Ok(self.known.get(handle).cloned())
    }
}

/// A receiving pod: manager plus ingestion pipeline.
pub struct ReceivingPod {
    pub manager: Arc<PhotoManager>,
    pub pipeline: IngestionPipeline,
    pub resolver: Arc<FixedResolver>,
    _media_dir: TempDir,
}

impl ReceivingPod {
    pub fn trusting(handles: &[&str]) -> Self {
        let media_dir = TempDir::new().unwrap();
        let blobs = Arc::new(FileSystemBlobStore::new(media_dir.path()).unwrap());
        let attachments = Arc::new(AttachmentStore::new(
            blobs,
            Arc::new(StubRenderer),
            StorageConfig::default(),
        ));
        let manager = Arc::new(PhotoManager::new(
            attachments,
            Arc::new(OpenAlbums),
            Arc::new(NoProfiles),
        ));
        let resolver = Arc::new(FixedResolver::trusting(handles));
        let pipeline = IngestionPipeline::new(resolver.clone(), manager.clone());

        Self {
            manager,
            pipeline,
            resolver,
            _media_dir: media_dir,
        }
    }
}

/// A stored local record on a sending pod, for serialization tests.
pub struct SendingPod {
    pub manager: Arc<PhotoManager>,
    pub owner: PersonRef,
    pub album: AlbumId,
    _media_dir: TempDir,
}

impl SendingPod {
    pub fn new() -> Self {
        let media_dir = TempDir::new().unwrap();
        let blobs = Arc::new(FileSystemBlobStore::new(media_dir.path()).unwrap());
        let attachments = Arc::new(AttachmentStore::new(
            blobs,
            Arc::new(StubRenderer),
            StorageConfig::default(),
        ));
        let owner = PersonRef::new(
            PersonId::generate(),
            FederationHandle::new("alice@origin.example"),
        );
        let album = AlbumId::generate();
        let albums: HashMap<AlbumId, PersonId> = HashMap::from([(album, owner.id)]);

        struct Fixed(HashMap<AlbumId, PersonId>);
        #[async_trait::async_trait]
        impl AlbumDirectory for Fixed {
            async fn album_owner(&self, album: &AlbumId) -> FrescoResult<Option<PersonId>> {
                Ok(self.0.get(album).copied())
            }
        }

        let manager = Arc::new(PhotoManager::new(
            attachments,
            Arc::new(Fixed(albums)),
            Arc::new(NoProfiles),
        ));

        Self {
            manager,
            owner,
            album,
            _media_dir: media_dir,
        }
    }

    pub async fn stored_photo(&self, caption: Option<&str>) -> PhotoRecord {
        self.manager
            .create_from_upload(
                self.owner.clone(),
                self.album,
                caption.map(str::to_string),
                BUTTON_PNG,
                "image/png",
                "button.png",
            )
            .await
            .unwrap()
    }
}
