//! Shared test fixtures for the photo lifecycle tests.

use fresco_core::{AlbumId, FederationHandle, PersonId, PersonRef};
use fresco_error::FrescoResult;
use fresco_photos::{AlbumDirectory, PhotoManager, PhotoRecord, ProfileStore};
use fresco_storage::{
    AttachmentStore, DerivativeRenderer, FileSystemBlobStore, StorageConfig, VariantSpec,
};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::RwLock;

/// Minimal bytes that pass PNG signature validation.
pub const BUTTON_PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR button bytes";
pub const MSG_XML: &[u8] = b"<?xml version=\"1.0\"?><msg>not an image</msg>";

/// Renderer stub that tags output with the variant name.
pub struct StubRenderer;

#[async_trait::async_trait]
impl DerivativeRenderer for StubRenderer {
    async fn render(&self, data: &[u8], spec: &VariantSpec) -> FrescoResult<Vec<u8>> {
        let mut out = data.to_vec();
        out.extend_from_slice(spec.variant.as_str().as_bytes());
        Ok(out)
    }
}

/// In-memory profile store.
#[derive(Default)]
pub struct InMemoryProfiles {
    urls: RwLock<HashMap<PersonId, String>>,
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryProfiles {
    async fn image_url(&self, person: &PersonId) -> FrescoResult<Option<String>> {
        Ok(self.urls.read().await.get(person).cloned())
    }

    async fn set_image_url(&self, person: &PersonId, url: Option<String>) -> FrescoResult<()> {
        let mut urls = self.urls.write().await;
        match url {
            Some(url) => {
                urls.insert(*person, url);
            }
            None => {
                urls.remove(person);
            }
        }
        Ok(())
    }
}

/// Album directory stub over a fixed owner map.
pub struct FixedAlbums {
    owners: HashMap<AlbumId, PersonId>,
}

#[async_trait::async_trait]
impl AlbumDirectory for FixedAlbums {
    async fn album_owner(&self, album: &AlbumId) -> FrescoResult<Option<PersonId>> {
        Ok(self.owners.get(album).copied())
    }
}

/// One pod's worth of wired-up fixtures.
pub struct TestPod {
    pub owner: PersonRef,
    pub album: AlbumId,
    pub foreign_album: AlbumId,
    pub manager: Arc<PhotoManager>,
    pub profiles: Arc<InMemoryProfiles>,
    _media_dir: TempDir,
}

impl TestPod {
    pub fn new() -> Self {
        let owner = PersonRef::new(
            PersonId::generate(),
            FederationHandle::new("alice@pod.example"),
        );
        let stranger = PersonId::generate();
        let album = AlbumId::generate();
        let foreign_album = AlbumId::generate();

        let mut owners = HashMap::new();
        owners.insert(album, owner.id);
        owners.insert(foreign_album, stranger);

        let media_dir = TempDir::new().unwrap();
        let blobs = Arc::new(FileSystemBlobStore::new(media_dir.path()).unwrap());
        let attachments = Arc::new(AttachmentStore::new(
            blobs,
            Arc::new(StubRenderer),
            StorageConfig::default(),
        ));
        let profiles = Arc::new(InMemoryProfiles::default());
        let manager = Arc::new(PhotoManager::new(
            attachments,
            Arc::new(FixedAlbums { owners }),
            profiles.clone(),
        ));

        Self {
            owner,
            album,
            foreign_album,
            manager,
            profiles,
            _media_dir: media_dir,
        }
    }

    pub async fn upload(
        &self,
        data: &[u8],
        declared: &str,
        filename: &str,
    ) -> FrescoResult<PhotoRecord> {
        self.manager
            .create_from_upload(
                self.owner.clone(),
                self.album,
                None,
                data,
                declared,
                filename,
            )
            .await
    }

    pub async fn set_profile_image(&self, url: &str) {
        self.profiles
            .set_image_url(&self.owner.id, Some(url.to_string()))
            .await
            .unwrap();
    }

    pub async fn profile_image(&self) -> Option<String> {
        self.profiles.image_url(&self.owner.id).await.unwrap()
    }
}
