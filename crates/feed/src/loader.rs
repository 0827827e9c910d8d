//! Cursor-based incremental loader for the public project feed.
//!
//! One loader owns one result sequence and its [`FeedCursor`]. At most one
//! fetch is in flight at a time: a second call is rejected as a
//! precondition failure rather than queued, so pages are strictly
//! serialized and never duplicated. The internal lock is never held across
//! an await.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use folio_core::paging::{clamp_page_size, MAX_PAGE_SIZE};
use folio_store::{Query, Record, RemoteStore, StoreError};

use crate::cursor::FeedCursor;

/// Failures surfaced by the loader.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// A fetch is already in flight; the call was a no-op.
    #[error("A feed load is already in flight")]
    Busy,

    /// The feed has no further pages (or no page has been loaded yet).
    #[error("The feed has no more pages")]
    Exhausted,

    /// The underlying store failed. Prior state is untouched; retrying
    /// reissues the identical query.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Point-in-time view of the loader for a presentation layer.
#[derive(Debug, Clone)]
pub struct FeedSnapshot<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

struct LoaderState<T: Record> {
    items: Vec<T>,
    cursor: FeedCursor<T::Id>,
    error: Option<String>,
}

/// Incremental feed loader over a [`RemoteStore`].
pub struct FeedLoader<T: Record, S> {
    store: S,
    state: Mutex<LoaderState<T>>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when a fetch completes or unwinds.
pub(crate) struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Try to mark a fetch as in flight. `None` when one already is.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl<T, S> FeedLoader<T, S>
where
    T: Record,
    S: RemoteStore<T>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: Mutex::new(LoaderState {
                items: Vec::new(),
                cursor: FeedCursor::new(),
                error: None,
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Load the first page, REPLACING any existing result sequence.
    ///
    /// Resets the cursor, queries the newest `page_size` records by id
    /// descending, and recomputes `has_more` against the size requested.
    /// On failure all prior state is left untouched and the error is
    /// recorded for the snapshot.
    pub async fn load_initial(&self, page_size: i64) -> Result<usize, FeedError> {
        let _guard = self.begin()?;
        self.fetch_initial(page_size).await
    }

    /// Load the next page and APPEND it to the result sequence.
    ///
    /// Precondition failures (both non-fatal, state untouched):
    /// [`FeedError::Busy`] while a fetch is in flight, and
    /// [`FeedError::Exhausted`] when the feed is closed or no initial page
    /// has completed yet.
    pub async fn load_more(&self, page_size: i64) -> Result<usize, FeedError> {
        let _guard = self.begin()?;

        let before = {
            let state = self.state.lock().unwrap();
            if !state.cursor.has_more {
                return Err(FeedError::Exhausted);
            }
            match &state.cursor.last_seen_id {
                Some(id) => id.clone(),
                None => return Err(FeedError::Exhausted),
            }
        };

        let size = clamp_page_size(page_size, MAX_PAGE_SIZE);
        let query = Query::by_id_desc().limit(size).before(before);
        match self.store.select(&query).await {
            Ok(page) => {
                let returned = page.len();
                let tail = page.last().map(|record| record.id());

                let mut state = self.state.lock().unwrap();
                state.items.extend(page);
                state.cursor.advance(tail, returned as i64, size);
                state.error = None;
                tracing::debug!(
                    appended = returned,
                    total = state.items.len(),
                    has_more = state.cursor.has_more,
                    "Feed page appended"
                );
                Ok(returned)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Feed page load failed");
                self.state.lock().unwrap().error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// User-initiated retry after a failure: drop everything (items,
    /// cursor, recorded error) and reload the first page.
    pub async fn retry(&self, page_size: i64) -> Result<usize, FeedError> {
        let _guard = self.begin()?;
        {
            let mut state = self.state.lock().unwrap();
            state.items.clear();
            state.cursor.reset();
            state.error = None;
        }
        self.fetch_initial(page_size).await
    }

    /// Point-in-time view for the presentation layer.
    pub fn snapshot(&self) -> FeedSnapshot<T> {
        let state = self.state.lock().unwrap();
        FeedSnapshot {
            items: state.items.clone(),
            has_more: state.cursor.has_more,
            is_loading: self.in_flight.load(Ordering::Acquire),
            error: state.error.clone(),
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.state.lock().unwrap().items.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_more(&self) -> bool {
        self.state.lock().unwrap().cursor.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    /// Current cursor, mainly for diagnostics.
    pub fn cursor(&self) -> FeedCursor<T::Id> {
        self.state.lock().unwrap().cursor.clone()
    }

    // ---- private helpers ----

    /// Mark a fetch as in flight, or fail with [`FeedError::Busy`].
    fn begin(&self) -> Result<InFlightGuard<'_>, FeedError> {
        InFlightGuard::acquire(&self.in_flight).ok_or(FeedError::Busy)
    }

    /// Fetch and install the first page. Caller holds the in-flight guard.
    async fn fetch_initial(&self, page_size: i64) -> Result<usize, FeedError> {
        let size = clamp_page_size(page_size, MAX_PAGE_SIZE);
        let query = Query::by_id_desc().limit(size);
        match self.store.select(&query).await {
            Ok(page) => {
                let returned = page.len();
                let tail = page.last().map(|record| record.id());

                let mut state = self.state.lock().unwrap();
                state.items = page;
                state.cursor.reset();
                state.cursor.advance(tail, returned as i64, size);
                state.error = None;
                tracing::debug!(
                    count = returned,
                    has_more = state.cursor.has_more,
                    "Feed initial page loaded"
                );
                Ok(returned)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Feed initial load failed");
                self.state.lock().unwrap().error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
