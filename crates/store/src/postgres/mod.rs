//! Relational store implementation over Postgres.
//!
//! Each record type gets a repository-style [`RemoteStore`] impl: a column
//! list constant, `query_as` with bound parameters, `RETURNING id` on
//! insert. Both order fields map to `id` here because BIGSERIAL ids are
//! assigned in creation order.

mod feed_projects;
mod listings;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::query::Direction;

pub type DbPool = PgPool;

/// Handle to the relational store.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    /// Wrap an existing connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect using environment configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Verify the database connection is usable.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// SQL sort keyword for a query direction.
fn order_keyword(direction: Direction) -> &'static str {
    match direction {
        Direction::Ascending => "ASC",
        Direction::Descending => "DESC",
    }
}

/// Effective row limit for a query: explicit limits are clamped, absent
/// limits fall back to the unpaginated listing bound.
fn effective_limit(limit: Option<i64>) -> i64 {
    use folio_core::paging::{clamp_page_size, MAX_LISTING_ROWS, MAX_PAGE_SIZE};
    match limit {
        Some(n) => clamp_page_size(n, MAX_PAGE_SIZE),
        None => MAX_LISTING_ROWS,
    }
}
