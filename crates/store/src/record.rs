//! Store-facing traits: [`Record`], [`Document`], and [`RemoteStore`].

use std::fmt::Display;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use folio_core::content::{ContentDraft, ContentItem};
use folio_core::project::{Project, ProjectDraft};
use folio_core::types::{DocId, Timestamp};

use crate::error::StoreError;
use crate::query::Query;

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// An entity that lives in a remote store.
///
/// `Id` is the store-assigned identity (immutable once assigned); `Draft`
/// is the insert payload carrying every field except the id. The total
/// order on `Id` drives the feed cursor (`id < before_id`).
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Clone + Ord + Display + Send + Sync + 'static;
    type Draft: Clone + Send + Sync + 'static;

    /// Entity name used in logs and error messages.
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    /// Synthesize the post-insert entity from the store-assigned id and the
    /// original draft fields. This is how callers build their local copy
    /// without a confirmation read.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Creation timestamp, where the entity carries one. Used for
    /// newest-first ordering by stores that evaluate queries in memory.
    fn created_at(&self) -> Option<Timestamp> {
        None
    }
}

/// A [`Record`] stored as a JSON document in a named collection.
pub trait Document: Record<Id = DocId> + Serialize + DeserializeOwned {
    const COLLECTION: &'static str;

    /// Decode a raw document (id plus field object) into a fully populated
    /// entity, filling defaults for absent optional fields. Fails with
    /// [`StoreError::Decode`] rather than producing a partial entity.
    fn decode(id: DocId, fields: serde_json::Value) -> Result<Self, StoreError> {
        crate::decode::from_fields(id, fields)
    }
}

// ---------------------------------------------------------------------------
// RemoteStore
// ---------------------------------------------------------------------------

/// The uniform query/mutation interface over a remote data store.
///
/// Both hosted backends and the in-memory test double implement this; the
/// feed and admin layers only ever see this trait.
#[async_trait]
pub trait RemoteStore<T: Record>: Send + Sync {
    /// Fetch records matching `query`, in query order.
    async fn select(&self, query: &Query<T::Id>) -> Result<Vec<T>, StoreError>;

    /// Insert a new record, returning the store-assigned id.
    async fn insert(&self, draft: &T::Draft) -> Result<T::Id, StoreError>;

    /// Overwrite the record whose id matches `record.id()`.
    async fn update(&self, record: &T) -> Result<(), StoreError>;

    /// Delete the record with the given id.
    async fn delete(&self, id: &T::Id) -> Result<(), StoreError>;
}

/// Stores are commonly shared between a loader and a collection on the
/// same session; delegate through `Arc` so one connection pool or HTTP
/// client serves both.
#[async_trait]
impl<T, S> RemoteStore<T> for std::sync::Arc<S>
where
    T: Record,
    S: RemoteStore<T> + ?Sized,
{
    async fn select(&self, query: &Query<T::Id>) -> Result<Vec<T>, StoreError> {
        (**self).select(query).await
    }

    async fn insert(&self, draft: &T::Draft) -> Result<T::Id, StoreError> {
        (**self).insert(draft).await
    }

    async fn update(&self, record: &T) -> Result<(), StoreError> {
        (**self).update(record).await
    }

    async fn delete(&self, id: &T::Id) -> Result<(), StoreError> {
        (**self).delete(id).await
    }
}

// ---------------------------------------------------------------------------
// Id generation (in-memory store)
// ---------------------------------------------------------------------------

/// How the in-memory store mints ids for inserted records.
pub trait GeneratedId: Sized {
    fn generate(sequence: u64) -> Self;
}

impl GeneratedId for i64 {
    fn generate(sequence: u64) -> Self {
        sequence as i64
    }
}

impl GeneratedId for String {
    fn generate(_sequence: u64) -> Self {
        uuid::Uuid::new_v4().to_string()
    }
}

// ---------------------------------------------------------------------------
// Record impls for document entities
// ---------------------------------------------------------------------------

impl Record for Project {
    type Id = DocId;
    type Draft = ProjectDraft;

    const ENTITY: &'static str = "project";

    fn id(&self) -> DocId {
        self.id.clone()
    }

    fn from_draft(id: DocId, draft: ProjectDraft) -> Self {
        Project {
            id,
            title: draft.title,
            description: draft.description,
            content: draft.content,
            image: draft.image,
            url: draft.url,
            author: draft.author,
            date: draft.date,
            steps: draft.steps,
        }
    }
}

impl Record for ContentItem {
    type Id = DocId;
    type Draft = ContentDraft;

    const ENTITY: &'static str = "content item";

    fn id(&self) -> DocId {
        self.id.clone()
    }

    fn from_draft(id: DocId, draft: ContentDraft) -> Self {
        ContentItem {
            id,
            kind: draft.kind,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            link: draft.link,
            created_at: draft.created_at,
        }
    }

    fn created_at(&self) -> Option<Timestamp> {
        Some(self.created_at)
    }
}
