//! [`RemoteStore`] impl for the `projects` feed table.

use async_trait::async_trait;

use folio_core::types::DbId;

use crate::error::StoreError;
use crate::models::{FeedProject, FeedProjectDraft};
use crate::query::Query;
use crate::record::{Record, RemoteStore};

use super::{effective_limit, order_keyword, PgStore};

/// Column list for feed project queries.
const COLUMNS: &str = "id, title, description, content, image, url, author, date";

#[async_trait]
impl RemoteStore<FeedProject> for PgStore {
    async fn select(&self, query: &Query<DbId>) -> Result<Vec<FeedProject>, StoreError> {
        let limit = effective_limit(query.limit);
        let dir = order_keyword(query.direction);
        tracing::debug!(?query, limit, "Feed project select");

        let rows = if let Some(before) = query.before_id {
            let sql = format!(
                "SELECT {COLUMNS} FROM projects WHERE id < $1 ORDER BY id {dir} LIMIT $2"
            );
            sqlx::query_as::<_, FeedProject>(&sql)
                .bind(before)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql = format!("SELECT {COLUMNS} FROM projects ORDER BY id {dir} LIMIT $1");
            sqlx::query_as::<_, FeedProject>(&sql)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(rows)
    }

    async fn insert(&self, draft: &FeedProjectDraft) -> Result<DbId, StoreError> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO projects (title, description, content, image, url, author, date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.content)
        .bind(&draft.image)
        .bind(&draft.url)
        .bind(&draft.author)
        .bind(&draft.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, record: &FeedProject) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE projects SET
                title = $2, description = $3, content = $4, image = $5,
                url = $6, author = $7, date = $8
             WHERE id = $1",
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.content)
        .bind(&record.image)
        .bind(&record.url)
        .bind(&record.author)
        .bind(&record.date)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!(
                "{} with id {}",
                FeedProject::ENTITY,
                record.id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: &DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!(
                "{} with id {}",
                FeedProject::ENTITY,
                id
            )));
        }
        Ok(())
    }
}
