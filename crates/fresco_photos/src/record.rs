//! The photo record entity.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use fresco_core::{AlbumId, ContentType, PersonRef, PhotoId, StorageKey, Variant};
use fresco_storage::StoredAttachment;
use std::collections::BTreeMap;

/// Lifecycle state of a photo record.
///
/// Uploads that fail validation never become records, and destroyed records
/// leave the repository, so neither appears here.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum PhotoState {
    /// Bytes validated and stored locally
    #[display("stored")]
    Stored,
    /// Record ingested from a remote pod; bytes not fetched yet
    #[display("pending_remote")]
    PendingRemote,
    /// Remote bytes fetched and stored locally
    #[display("resolved")]
    Resolved,
}

/// One photo: identity, ownership, storage location, and derivative URLs.
///
/// `id` and `owner` are fixed at construction by the trusted creation path
/// and survive every update; external field maps go through
/// [`PhotoUpdate`](crate::PhotoUpdate) and can only reach caption.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PhotoRecord {
    /// Unique record id, minted locally
    id: PhotoId,
    /// Owning person, set once by the trusted creation path
    owner: PersonRef,
    /// Containing album, set at construction
    album: AlbumId,
    /// Owner-editable free text
    caption: Option<String>,
    /// Stamped once at construction
    created_at: DateTime<Utc>,
    /// Established by validation; `None` until remote bytes arrive
    content_type: Option<ContentType>,
    /// Random key of the local blobs; `None` while bytes are still remote
    storage_key: Option<StorageKey>,
    /// Lifecycle state
    state: PhotoState,
    /// Variant name to resolvable URL
    derivatives: BTreeMap<Variant, String>,
    /// Pixel width when known
    width: Option<u32>,
    /// Pixel height when known
    height: Option<u32>,
}

impl PhotoRecord {
    /// Construct a record for a locally stored upload.
    pub fn from_upload(
        owner: PersonRef,
        album: AlbumId,
        caption: Option<String>,
        stored: &StoredAttachment,
    ) -> Self {
        Self {
            id: PhotoId::generate(),
            owner,
            album,
            caption,
            created_at: Utc::now(),
            content_type: Some(*stored.content_type()),
            storage_key: Some(stored.key().clone()),
            state: PhotoState::Stored,
            derivatives: stored.derivatives().clone(),
            width: None,
            height: None,
        }
    }

    /// Construct a record for a photo ingested from a remote pod.
    ///
    /// The owner is the identity the receiving pod resolved for the sender,
    /// never text copied from the inbound document. Derivative URLs point at
    /// the origin pod until the bytes are fetched.
    pub fn from_remote(
        owner: PersonRef,
        album: AlbumId,
        caption: Option<String>,
        created_at: DateTime<Utc>,
        remote_urls: BTreeMap<Variant, String>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Self {
        Self {
            id: PhotoId::generate(),
            owner,
            album,
            caption,
            created_at,
            content_type: None,
            storage_key: None,
            state: PhotoState::PendingRemote,
            derivatives: remote_urls,
            width,
            height,
        }
    }

    /// Record pixel dimensions when the upload path knows them.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Whether the bytes still live on a remote pod.
    pub fn pending_remote(&self) -> bool {
        self.state == PhotoState::PendingRemote
    }

    /// URL of one derivative, when present.
    pub fn url(&self, variant: Variant) -> Option<&str> {
        self.derivatives.get(&variant).map(String::as_str)
    }

    pub(crate) fn set_caption(&mut self, caption: Option<String>) {
        self.caption = caption;
    }

    /// Transition PendingRemote → Resolved once bytes are stored locally.
    pub(crate) fn resolve_with(&mut self, stored: &StoredAttachment) {
        self.content_type = Some(*stored.content_type());
        self.storage_key = Some(stored.key().clone());
        self.derivatives = stored.derivatives().clone();
        self.state = PhotoState::Resolved;
    }
}
