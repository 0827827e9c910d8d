//! Read-only loaders for the static listing tables.
//!
//! The public site lists achievements, magazine features, recognitions,
//! and sponsors straight from the relational store, newest first. No
//! mutations, no pagination; just load-and-bind state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use folio_feed::FeedError;
use folio_store::{Query, Record, RemoteStore};

/// A thin load-once listing over one record type.
pub struct Listing<T: Record, S> {
    store: S,
    items: Mutex<Vec<T>>,
    error: Mutex<Option<String>>,
    in_flight: AtomicBool,
}

impl<T, S> Listing<T, S>
where
    T: Record,
    S: RemoteStore<T>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Mutex::new(Vec::new()),
            error: Mutex::new(None),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Fetch all rows, newest first. A call while another load is pending
    /// is rejected; a failed load keeps the previously loaded rows.
    pub async fn load(&self) -> Result<usize, FeedError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            return Err(FeedError::Busy);
        }

        let result = self.store.select(&Query::by_id_desc()).await;
        self.in_flight.store(false, Ordering::Release);

        match result {
            Ok(rows) => {
                let count = rows.len();
                *self.items.lock().unwrap() = rows;
                *self.error.lock().unwrap() = None;
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(entity = T::ENTITY, error = %err, "Listing load failed");
                *self.error.lock().unwrap() = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }
}
