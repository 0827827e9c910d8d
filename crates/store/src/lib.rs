//! The remote store boundary.
//!
//! Everything the rest of the workspace knows about persistence lives
//! behind the [`RemoteStore`] trait: a query interface (order, limit,
//! id cursor) and a mutation interface (insert, update, delete). Two real
//! backends implement it -- a JSON document store spoken to over HTTP
//! ([`rest::RestStore`]) and a relational store ([`postgres::PgStore`]) --
//! plus an in-memory double for tests ([`memory::MemoryStore`]).

pub mod config;
pub mod decode;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod query;
pub mod record;
pub mod rest;

mod models;

pub use error::StoreError;
pub use models::{
    Achievement, CreateAchievement, CreateMagazine, CreateRecognition, CreateSponsor,
    FeedProject, FeedProjectDraft, Magazine, Recognition, Sponsor,
};
pub use query::{Direction, OrderField, Query};
pub use record::{Document, GeneratedId, Record, RemoteStore};
