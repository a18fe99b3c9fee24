//! Profile image link cleanup on destroy.

use crate::{PhotoRecord, ProfileStore};
use fresco_error::FrescoResult;
use std::sync::Arc;

/// Clears the weak profile → photo back-reference when a photo dies.
///
/// The profile points at a derivative by URL value, not by id, so nothing
/// else will reconcile it: this component compares the owner's current
/// profile image URL against every derivative URL of the dying record and
/// clears it on a match. It runs inside destroy, before destroy returns, so
/// no caller can observe a dangling reference.
pub struct ProfileImageLinkCleaner {
    profiles: Arc<dyn ProfileStore>,
}

impl ProfileImageLinkCleaner {
    /// Create a cleaner over the profile boundary.
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Clear the owner's profile image URL if it points at this record.
    #[tracing::instrument(skip(self, record), fields(photo_id = %record.id()))]
    pub async fn on_destroy(&self, record: &PhotoRecord) -> FrescoResult<()> {
        let owner = &record.owner().id;
        let Some(current) = self.profiles.image_url(owner).await? else {
            return Ok(());
        };

        // Value equality on the URL string, not an identifier join
        if record.derivatives().values().any(|url| *url == current) {
            self.profiles.set_image_url(owner, None).await?;
            tracing::info!(
                person = %owner,
                "Cleared profile image URL referencing destroyed photo"
            );
        }
        Ok(())
    }
}
