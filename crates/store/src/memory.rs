//! In-memory [`RemoteStore`] implementation.
//!
//! Serves as the store double in feed and admin tests (including one-shot
//! failure injection) and as an offline fake. Query evaluation matches the
//! real backends: order by id or creation time, exclusive id cursor, limit.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::query::{Direction, OrderField, Query};
use crate::record::{GeneratedId, Record, RemoteStore};

/// How an injected failure surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// An unreachable or failing backend (surfaces as a 503).
    Network,
    /// The store rejected the caller.
    Permission,
    /// The addressed record does not exist.
    NotFound,
}

/// In-memory store over a vector of records.
///
/// Ids are minted from a private sequence; seeded records keep the ids they
/// were seeded with.
pub struct MemoryStore<T: Record> {
    records: Mutex<Vec<T>>,
    next_seq: AtomicU64,
    fail_next: Mutex<Option<FailureMode>>,
}

impl<T: Record> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Create a store pre-populated with `records`.
    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            next_seq: AtomicU64::new(1),
            fail_next: Mutex::new(None),
        }
    }

    /// Make the next store operation fail with the given mode.
    pub fn fail_next(&self, mode: FailureMode) {
        *self.fail_next.lock().unwrap() = Some(mode);
    }

    /// Number of records currently held.
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn take_failure(&self) -> Result<(), StoreError> {
        let mode = self.fail_next.lock().unwrap().take();
        match mode {
            None => Ok(()),
            Some(FailureMode::Network) => Err(StoreError::Api {
                status: 503,
                body: "injected network failure".to_string(),
            }),
            Some(FailureMode::Permission) => {
                Err(StoreError::Permission("injected permission failure".to_string()))
            }
            Some(FailureMode::NotFound) => {
                Err(StoreError::NotFound("injected missing record".to_string()))
            }
        }
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RemoteStore<T> for MemoryStore<T>
where
    T: Record,
    T::Id: GeneratedId,
{
    async fn select(&self, query: &Query<T::Id>) -> Result<Vec<T>, StoreError> {
        self.take_failure()?;

        let records = self.records.lock().unwrap();
        let mut matched: Vec<T> = records
            .iter()
            .filter(|r| match &query.before_id {
                Some(before) => r.id() < *before,
                None => true,
            })
            .cloned()
            .collect();

        match query.order_by {
            OrderField::Id => matched.sort_by_key(|r| r.id()),
            // Records without a creation timestamp keep id order, which is
            // assignment order.
            OrderField::CreatedAt => matched.sort_by_key(|r| (r.created_at(), r.id())),
        }
        if query.direction == Direction::Descending {
            matched.reverse();
        }

        if let Some(limit) = query.limit {
            matched.truncate(limit.max(0) as usize);
        }
        Ok(matched)
    }

    async fn insert(&self, draft: &T::Draft) -> Result<T::Id, StoreError> {
        self.take_failure()?;

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let id = T::Id::generate(seq);
        let record = T::from_draft(id.clone(), draft.clone());
        self.records.lock().unwrap().push(record);
        Ok(id)
    }

    async fn update(&self, record: &T) -> Result<(), StoreError> {
        self.take_failure()?;

        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| {
                StoreError::NotFound(format!("{} with id {}", T::ENTITY, record.id()))
            })?;
        *slot = record.clone();
        Ok(())
    }

    async fn delete(&self, id: &T::Id) -> Result<(), StoreError> {
        self.take_failure()?;

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id() != *id);
        if records.len() == before {
            return Err(StoreError::NotFound(format!(
                "{} with id {}",
                T::ENTITY,
                id
            )));
        }
        Ok(())
    }
}
