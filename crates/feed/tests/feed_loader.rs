//! Integration tests for the incremental feed loader.
//!
//! Drives the loader against the in-memory store: replace/append
//! semantics, cursor advancement, end-of-feed detection, error policy,
//! and the single-fetch-in-flight guard.

use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use tokio::sync::Semaphore;

use folio_core::paging::{FOLLOW_PAGE_SIZE, INITIAL_PAGE_SIZE};
use folio_feed::{FeedError, FeedLoader};
use folio_store::memory::{FailureMode, MemoryStore};
use folio_store::{FeedProject, Query, Record, RemoteStore, StoreError};

fn row(id: i64) -> FeedProject {
    FeedProject {
        id,
        title: format!("Project {id}"),
        description: "A build log".to_string(),
        content: None,
        image: "https://example.com/p.jpg".to_string(),
        url: None,
        author: "Mukesh".to_string(),
        date: "May 1, 2025".to_string(),
    }
}

fn seeded(ids: impl IntoIterator<Item = i64>) -> Arc<MemoryStore<FeedProject>> {
    Arc::new(MemoryStore::seeded(ids.into_iter().map(row).collect()))
}

fn ids<T: Record<Id = i64>>(items: &[T]) -> Vec<i64> {
    items.iter().map(|r| r.id()).collect()
}

// ---------------------------------------------------------------------------
// Initial load
// ---------------------------------------------------------------------------

#[tokio::test]
async fn initial_page_is_newest_first() {
    let loader = FeedLoader::new(seeded(101..=109));
    let count = loader.load_initial(INITIAL_PAGE_SIZE).await.unwrap();

    assert_eq!(count, 9);
    let snapshot = loader.snapshot();
    assert_eq!(ids(&snapshot.items), (101..=109).rev().collect::<Vec<_>>());
    assert!(snapshot.has_more);
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.error, None);
}

#[tokio::test]
async fn second_initial_load_replaces_not_appends() {
    let loader = FeedLoader::new(seeded(101..=109));
    loader.load_initial(9).await.unwrap();
    loader.load_initial(9).await.unwrap();

    let items = loader.items();
    assert_eq!(items.len(), 9);
    let got = ids(&items);
    let mut deduped = got.clone();
    deduped.dedup();
    assert_eq!(got, deduped);
}

#[tokio::test]
async fn short_initial_page_closes_feed() {
    let loader = FeedLoader::new(seeded(1..=4));
    let count = loader.load_initial(9).await.unwrap();

    assert_eq!(count, 4);
    assert!(!loader.has_more());
    assert_matches!(loader.load_more(6).await, Err(FeedError::Exhausted));
}

// ---------------------------------------------------------------------------
// Incremental load
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_more_appends_next_page() {
    // 15 rows, ids 95..=109. Initial page of 9 takes [109..101]; the
    // follow-on page of 6 with cursor 101 returns [100..95].
    let loader = FeedLoader::new(seeded(95..=109));
    loader.load_initial(INITIAL_PAGE_SIZE).await.unwrap();
    assert_eq!(loader.cursor().last_seen_id, Some(101));

    let appended = loader.load_more(FOLLOW_PAGE_SIZE).await.unwrap();
    assert_eq!(appended, 6);

    let items = loader.items();
    assert_eq!(items.len(), 15);
    assert_eq!(ids(&items), (95..=109).rev().collect::<Vec<_>>());
    // 6 returned == 6 requested, so the feed stays open.
    assert!(loader.has_more());
    assert_eq!(loader.cursor().last_seen_id, Some(95));
}

#[tokio::test]
async fn accumulated_ids_strictly_decrease_without_duplicates() {
    let loader = FeedLoader::new(seeded(1..=10));
    loader.load_initial(4).await.unwrap();
    while loader.has_more() {
        loader.load_more(4).await.unwrap();
    }

    let got = ids(&loader.items());
    assert_eq!(got.len(), 10);
    assert!(got.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
async fn has_more_uses_the_size_requested_per_call() {
    // 12 rows: an initial 9 leaves 3. A follow-on request of 3 is fully
    // served, so has_more must be computed against 3, not the initial 9.
    let loader = FeedLoader::new(seeded(1..=12));
    loader.load_initial(9).await.unwrap();

    let appended = loader.load_more(3).await.unwrap();
    assert_eq!(appended, 3);
    assert!(loader.has_more());

    // The next page is empty, which closes the feed.
    assert_eq!(loader.load_more(3).await.unwrap(), 0);
    assert!(!loader.has_more());
}

#[tokio::test]
async fn load_more_before_any_initial_load_is_exhausted() {
    let loader = FeedLoader::new(seeded(1..=9));
    assert_matches!(loader.load_more(6).await, Err(FeedError::Exhausted));
    assert!(loader.is_empty());
}

#[tokio::test]
async fn exhausted_load_more_leaves_state_untouched() {
    let loader = FeedLoader::new(seeded(1..=4));
    loader.load_initial(9).await.unwrap();
    let before = ids(&loader.items());

    assert_matches!(loader.load_more(6).await, Err(FeedError::Exhausted));
    assert_eq!(ids(&loader.items()), before);
}

// ---------------------------------------------------------------------------
// Error policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_page_preserves_items_and_cursor() {
    let store = seeded(95..=109);
    let loader = FeedLoader::new(store.clone());
    loader.load_initial(9).await.unwrap();
    let cursor_before = loader.cursor();

    store.fail_next(FailureMode::Network);
    let err = loader.load_more(6).await.unwrap_err();
    assert_matches!(err, FeedError::Store(StoreError::Api { .. }));

    // No partial append, cursor unchanged, error surfaced in the snapshot.
    assert_eq!(loader.len(), 9);
    assert_eq!(loader.cursor(), cursor_before);
    assert!(loader.error().is_some());

    // A retry of the same call reissues the identical query and succeeds.
    let appended = loader.load_more(6).await.unwrap();
    assert_eq!(appended, 6);
    assert_eq!(loader.len(), 15);
    assert_eq!(loader.error(), None);
}

#[tokio::test]
async fn failed_initial_load_keeps_prior_sequence() {
    let store = seeded(1..=9);
    let loader = FeedLoader::new(store.clone());
    loader.load_initial(9).await.unwrap();

    store.fail_next(FailureMode::Permission);
    assert_matches!(
        loader.load_initial(9).await,
        Err(FeedError::Store(StoreError::Permission(_)))
    );
    assert_eq!(loader.len(), 9);
    assert!(loader.error().is_some());
}

#[tokio::test]
async fn retry_resets_everything_then_reloads() {
    let store = seeded(1..=9);
    let loader = FeedLoader::new(store.clone());
    loader.load_initial(4).await.unwrap();
    loader.load_more(4).await.unwrap();

    store.fail_next(FailureMode::Network);
    let _ = loader.load_more(4).await;
    assert!(loader.error().is_some());

    let count = loader.retry(4).await.unwrap();
    assert_eq!(count, 4);
    assert_eq!(ids(&loader.items()), vec![9, 8, 7, 6]);
    assert_eq!(loader.error(), None);
    assert!(loader.has_more());
}

// ---------------------------------------------------------------------------
// In-flight guard
// ---------------------------------------------------------------------------

/// Store wrapper whose reads block until a permit is released, so a test
/// can observe the loader mid-fetch.
struct GatedStore<S> {
    inner: S,
    gate: Semaphore,
}

#[async_trait]
impl<T, S> RemoteStore<T> for GatedStore<S>
where
    T: Record,
    S: RemoteStore<T>,
{
    async fn select(&self, query: &Query<T::Id>) -> Result<Vec<T>, StoreError> {
        let _permit = self.gate.acquire().await.expect("gate closed");
        self.inner.select(query).await
    }

    async fn insert(&self, draft: &T::Draft) -> Result<T::Id, StoreError> {
        self.inner.insert(draft).await
    }

    async fn update(&self, record: &T) -> Result<(), StoreError> {
        self.inner.update(record).await
    }

    async fn delete(&self, id: &T::Id) -> Result<(), StoreError> {
        self.inner.delete(id).await
    }
}

#[tokio::test]
async fn concurrent_fetch_is_rejected_not_queued() {
    let store = Arc::new(GatedStore {
        inner: MemoryStore::seeded((1..=9).map(row).collect()),
        gate: Semaphore::new(0),
    });
    let loader = Arc::new(FeedLoader::new(store.clone()));

    let pending = {
        let loader = Arc::clone(&loader);
        tokio::spawn(async move { loader.load_initial(9).await })
    };

    // Let the spawned fetch reach the gate.
    tokio::task::yield_now().await;
    assert!(loader.is_loading());

    // A second call while one is pending is a no-op precondition failure.
    assert_matches!(loader.load_more(6).await, Err(FeedError::Busy));
    assert_matches!(loader.load_initial(9).await, Err(FeedError::Busy));

    // Release the gate; the pending fetch completes normally.
    store.gate.add_permits(1);
    let count = pending.await.unwrap().unwrap();
    assert_eq!(count, 9);
    assert!(!loader.is_loading());
    assert_eq!(loader.len(), 9);
}
