//! In-memory photo record repository.

use crate::PhotoRecord;
use fresco_core::PhotoId;
use fresco_error::{FrescoResult, PhotoError, PhotoErrorKind};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared, clonable store of photo records.
///
/// Reads return snapshots. Mutations are serialized per record: two
/// concurrent updates to the same id apply one after the other
/// (last-writer-wins), while updates to different ids proceed
/// independently.
#[derive(Clone, Default)]
pub struct PhotoRepository {
    records: Arc<RwLock<HashMap<PhotoId, PhotoRecord>>>,
    // One mutex per live record; guards the read-modify-write cycle
    locks: Arc<Mutex<HashMap<PhotoId, Arc<Mutex<()>>>>>,
}

impl PhotoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly constructed record.
    pub async fn insert(&self, record: PhotoRecord) {
        self.records.write().await.insert(*record.id(), record);
    }

    /// Snapshot of a record by id.
    pub async fn get(&self, id: &PhotoId) -> Option<PhotoRecord> {
        self.records.read().await.get(id).cloned()
    }

    /// Number of records held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the repository holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Remove a record, returning it when present.
    pub async fn remove(&self, id: &PhotoId) -> Option<PhotoRecord> {
        self.locks.lock().await.remove(id);
        self.records.write().await.remove(id)
    }

    /// Apply a closure to one record under its per-record lock.
    ///
    /// The lock is held across the whole read-modify-write cycle, so
    /// interleaved mutations of a single record cannot tear.
    pub async fn mutate<F>(&self, id: &PhotoId, f: F) -> FrescoResult<PhotoRecord>
    where
        F: FnOnce(&mut PhotoRecord),
    {
        let lock = {
            let mut locks = self.locks.lock().await;
            if !self.records.read().await.contains_key(id) {
                return Err(PhotoError::new(PhotoErrorKind::NotFound(id.to_string())).into());
            }
            locks
                .entry(*id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        let _guard = lock.lock().await;

        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| PhotoError::new(PhotoErrorKind::NotFound(id.to_string())))?;
        f(record);
        Ok(record.clone())
    }
}
