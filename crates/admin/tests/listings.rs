//! Integration tests for the static listing loaders.

use std::sync::Arc;

use assert_matches::assert_matches;

use folio_admin::Listing;
use folio_feed::FeedError;
use folio_store::memory::{FailureMode, MemoryStore};
use folio_store::Magazine;

fn magazine(id: i64, title: &str) -> Magazine {
    Magazine {
        id,
        title: title.to_string(),
        image_url: "https://example.com/cover.jpg".to_string(),
        website_url: "https://example.com".to_string(),
    }
}

#[tokio::test]
async fn load_lists_newest_first() {
    let store = Arc::new(MemoryStore::seeded(vec![
        magazine(1, "Issue one"),
        magazine(3, "Issue three"),
        magazine(2, "Issue two"),
    ]));
    let listing = Listing::new(store);

    let count = listing.load().await.unwrap();
    assert_eq!(count, 3);

    let items = listing.items();
    let titles: Vec<&str> = items.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Issue three", "Issue two", "Issue one"]);
    assert!(!listing.is_loading());
    assert_eq!(listing.error(), None);
}

#[tokio::test]
async fn failed_load_keeps_previous_rows() {
    let store = Arc::new(MemoryStore::seeded(vec![magazine(1, "Issue one")]));
    let listing = Listing::new(store.clone());
    listing.load().await.unwrap();

    store.fail_next(FailureMode::Network);
    let err = listing.load().await.unwrap_err();
    assert_matches!(err, FeedError::Store(_));

    assert_eq!(listing.items().len(), 1);
    assert!(listing.error().is_some());

    // A user-initiated retry clears the recorded error.
    listing.load().await.unwrap();
    assert_eq!(listing.error(), None);
}

#[tokio::test]
async fn empty_table_loads_cleanly() {
    let store: Arc<MemoryStore<Magazine>> = Arc::new(MemoryStore::new());
    let listing = Listing::new(store);

    assert_eq!(listing.load().await.unwrap(), 0);
    assert!(listing.is_empty());
    assert_eq!(listing.error(), None);
}
