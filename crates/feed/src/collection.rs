//! Locally cached entity sequence synchronized with remote writes.
//!
//! Every mutation goes to the store first; only a success mutates the
//! local sequence, so local state always matches the last known-good
//! remote write for that entity. There is no reconciliation with writes
//! from other sessions: the last local writer wins in this view until a
//! [`refresh`](OptimisticCollection::refresh).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use folio_store::{Query, Record, RemoteStore, StoreError};

use crate::loader::{FeedError, InFlightGuard};

/// Point-in-time view of the collection for a presentation layer.
#[derive(Debug, Clone)]
pub struct CollectionSnapshot<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Local-first cache of entities created and edited against a remote store.
pub struct OptimisticCollection<T: Record, S> {
    store: S,
    items: Mutex<Vec<T>>,
    last_error: Mutex<Option<String>>,
    in_flight: AtomicBool,
}

impl<T, S> OptimisticCollection<T, S>
where
    T: Record,
    S: RemoteStore<T>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Mutex::new(Vec::new()),
            last_error: Mutex::new(None),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Replace the local sequence with a fresh store fetch.
    ///
    /// Rejected with [`FeedError::Busy`] while another refresh is pending.
    /// On failure the local sequence is left untouched.
    pub async fn refresh(&self, query: &Query<T::Id>) -> Result<usize, FeedError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(FeedError::Busy)?;

        match self.store.select(query).await {
            Ok(fetched) => {
                let count = fetched.len();
                *self.items.lock().unwrap() = fetched;
                *self.last_error.lock().unwrap() = None;
                tracing::debug!(entity = T::ENTITY, count, "Collection refreshed");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(entity = T::ENTITY, error = %err, "Collection refresh failed");
                *self.last_error.lock().unwrap() = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Insert a new entity through the store.
    ///
    /// On success the local entity is synthesized from the store-assigned
    /// id plus the original draft fields and placed at the HEAD of the
    /// sequence. That most-recent-first position is a local ordering
    /// decision, an approximation of the store's creation-time order until
    /// the next refresh. On failure the sequence is unchanged and the
    /// entity must not be assumed to exist.
    pub async fn create(&self, draft: T::Draft) -> Result<T, StoreError> {
        let id = self.store.insert(&draft).await?;
        let entity = T::from_draft(id, draft);
        self.items.lock().unwrap().insert(0, entity.clone());
        tracing::info!(entity = T::ENTITY, id = %entity.id(), "Created");
        Ok(entity)
    }

    /// Overwrite an existing entity through the store, then replace the
    /// matching local entity by id. The replacement is an exact overwrite,
    /// not a merge: no stale fields survive. Length and the order of other
    /// entities are unchanged. On failure the sequence is unchanged.
    pub async fn update(&self, entity: T) -> Result<(), StoreError> {
        self.store.update(&entity).await?;

        let mut items = self.items.lock().unwrap();
        if let Some(slot) = items.iter_mut().find(|e| e.id() == entity.id()) {
            *slot = entity;
        }
        Ok(())
    }

    /// Delete an entity through the store, then drop the matching local
    /// entity. On failure the sequence is unchanged.
    pub async fn remove(&self, id: &T::Id) -> Result<(), StoreError> {
        self.store.delete(id).await?;
        self.items.lock().unwrap().retain(|e| e.id() != *id);
        tracing::info!(entity = T::ENTITY, %id, "Removed");
        Ok(())
    }

    /// Look up an entity in the local sequence. Never fetches.
    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id() == *id)
            .cloned()
    }

    /// Snapshot of the local sequence. Never fetches.
    pub fn items(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn error(&self) -> Option<String> {
        self.last_error.lock().unwrap().clone()
    }

    /// Point-in-time view for the presentation layer.
    pub fn snapshot(&self) -> CollectionSnapshot<T> {
        CollectionSnapshot {
            items: self.items(),
            is_loading: self.is_loading(),
            error: self.error(),
        }
    }
}
