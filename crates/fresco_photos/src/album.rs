//! Album boundary trait.

use fresco_core::{AlbumId, PersonId};
use fresco_error::FrescoResult;

/// Trait for the external album directory.
///
/// The lifecycle manager only needs enough of the album graph to check, at
/// creation time, that a photo lands in an album owned by the uploading
/// person.
#[async_trait::async_trait]
pub trait AlbumDirectory: Send + Sync {
    /// Owner of an album, or `None` when the album does not exist.
    async fn album_owner(&self, album: &AlbumId) -> FrescoResult<Option<PersonId>>;
}
