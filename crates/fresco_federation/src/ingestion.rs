//! Idempotent inbound ingestion.

use crate::{SenderResolver, from_xml};
use fresco_core::{FederationHandle, PhotoId};
use fresco_error::{FederationError, FederationErrorKind, FrescoResult};
use fresco_photos::{PhotoManager, PhotoRecord};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Turns inbound `<photo>` documents into local PendingRemote records.
///
/// Processing is idempotent per `(sender, remote-id)` pair: replaying a
/// message yields the id of the record the first delivery created, and a
/// rejected message leaves no state behind, so one bad document never
/// blocks the ones after it.
pub struct IngestionPipeline {
    resolver: Arc<dyn SenderResolver>,
    manager: Arc<PhotoManager>,
    seen: Mutex<HashMap<(FederationHandle, String), PhotoId>>,
}

impl IngestionPipeline {
    /// Create a pipeline over the pod's trust layer and photo manager.
    pub fn new(resolver: Arc<dyn SenderResolver>, manager: Arc<PhotoManager>) -> Self {
        Self {
            resolver,
            manager,
            seen: Mutex::new(HashMap::new()),
        }
    }

    /// Ingest one inbound document.
    ///
    /// Parses fail-closed, resolves the claimed sender through the pod's
    /// own trust layer, and constructs a PendingRemote record bound to the
    /// resolved identity. The record gets a fresh local id; the origin pod's
    /// id survives only inside the dedup key, and its storage keys never
    /// arrive at all.
    #[tracing::instrument(skip(self, document), fields(size = document.len()))]
    pub async fn ingest(&self, document: &str) -> FrescoResult<PhotoId> {
        let remote = match from_xml(document) {
            Ok(remote) => remote,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected inbound photo message");
                return Err(e.into());
            }
        };

        let owner = self
            .resolver
            .resolve(&remote.sender_handle)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    sender = remote.sender_handle.as_str(),
                    "Rejected inbound photo from unresolvable sender"
                );
                FederationError::new(FederationErrorKind::UnknownSender(
                    remote.sender_handle.to_string(),
                ))
            })?;

        // Hold the dedup map across insertion so a concurrent replay of the
        // same message cannot create a second record
        let mut seen = self.seen.lock().await;
        if let Some(existing) = seen.get(&remote.dedup_key()) {
            tracing::debug!(
                sender = remote.sender_handle.as_str(),
                remote_id = remote.remote_id.as_str(),
                photo_id = %existing,
                "Duplicate inbound photo message; returning existing record"
            );
            return Ok(*existing);
        }

        let record = PhotoRecord::from_remote(
            owner,
            remote.album_id,
            remote.caption.clone(),
            remote.created_at,
            remote.remote_urls(),
            remote.width,
            remote.height,
        );
        let id = *record.id();
        self.manager.adopt(record).await;
        seen.insert(remote.dedup_key(), id);

        tracing::info!(
            sender = remote.sender_handle.as_str(),
            remote_id = remote.remote_id.as_str(),
            photo_id = %id,
            "Ingested remote photo as pending record"
        );
        Ok(id)
    }
}
