//! Reactive data-layer state over the remote store boundary.
//!
//! [`FeedLoader`] owns cursor-based incremental pagination for the public
//! feed; [`OptimisticCollection`] owns a locally cached entity sequence
//! kept in step with remote writes. Both expose plain snapshots
//! (`items`, `is_loading`, `has_more`, `error`) that any UI layer can bind
//! to, and both are safe to share behind `Arc` on a single event loop.

pub mod collection;
pub mod cursor;
pub mod loader;

pub use collection::{CollectionSnapshot, OptimisticCollection};
pub use cursor::FeedCursor;
pub use loader::{FeedError, FeedLoader, FeedSnapshot};
