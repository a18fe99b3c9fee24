//! Profile boundary trait.

use fresco_core::PersonId;
use fresco_error::FrescoResult;

/// Trait for the external profile capability.
///
/// A profile holds at most one image URL, by string value; there is no
/// structural reference to a photo record, so the storage layer offers no
/// referential integrity here.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Current profile image URL for a person, if one is set.
    async fn image_url(&self, person: &PersonId) -> FrescoResult<Option<String>>;

    /// Set or clear the profile image URL for a person.
    async fn set_image_url(&self, person: &PersonId, url: Option<String>) -> FrescoResult<()>;
}
