//! [`RemoteStore`] impls for the static listing tables.
//!
//! These tables are read-mostly (the public site only lists them), but the
//! full mutation interface is implemented so admin tooling can manage them
//! through the same seam as everything else.

use async_trait::async_trait;

use folio_core::types::DbId;

use crate::error::StoreError;
use crate::models::{
    Achievement, CreateAchievement, CreateMagazine, CreateRecognition, CreateSponsor, Magazine,
    Recognition, Sponsor,
};
use crate::query::Query;
use crate::record::{Record, RemoteStore};

use super::{effective_limit, order_keyword, PgStore};

fn not_found(entity: &str, id: DbId) -> StoreError {
    StoreError::NotFound(format!("{entity} with id {id}"))
}

// ---------------------------------------------------------------------------
// achievements
// ---------------------------------------------------------------------------

const ACHIEVEMENT_COLUMNS: &str = "id, icon, title, link, year";

#[async_trait]
impl RemoteStore<Achievement> for PgStore {
    async fn select(&self, query: &Query<DbId>) -> Result<Vec<Achievement>, StoreError> {
        let limit = effective_limit(query.limit);
        let dir = order_keyword(query.direction);

        let rows = if let Some(before) = query.before_id {
            let sql = format!(
                "SELECT {ACHIEVEMENT_COLUMNS} FROM achievements WHERE id < $1 ORDER BY id {dir} LIMIT $2"
            );
            sqlx::query_as::<_, Achievement>(&sql)
                .bind(before)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql =
                format!("SELECT {ACHIEVEMENT_COLUMNS} FROM achievements ORDER BY id {dir} LIMIT $1");
            sqlx::query_as::<_, Achievement>(&sql)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(rows)
    }

    async fn insert(&self, draft: &CreateAchievement) -> Result<DbId, StoreError> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO achievements (icon, title, link, year)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&draft.icon)
        .bind(&draft.title)
        .bind(&draft.link)
        .bind(draft.year)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, record: &Achievement) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE achievements SET icon = $2, title = $3, link = $4, year = $5 WHERE id = $1",
        )
        .bind(record.id)
        .bind(&record.icon)
        .bind(&record.title)
        .bind(&record.link)
        .bind(record.year)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(Achievement::ENTITY, record.id));
        }
        Ok(())
    }

    async fn delete(&self, id: &DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(Achievement::ENTITY, *id));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// magazines
// ---------------------------------------------------------------------------

const MAGAZINE_COLUMNS: &str = "id, title, image_url, website_url";

#[async_trait]
impl RemoteStore<Magazine> for PgStore {
    async fn select(&self, query: &Query<DbId>) -> Result<Vec<Magazine>, StoreError> {
        let limit = effective_limit(query.limit);
        let dir = order_keyword(query.direction);

        let rows = if let Some(before) = query.before_id {
            let sql = format!(
                "SELECT {MAGAZINE_COLUMNS} FROM magazines WHERE id < $1 ORDER BY id {dir} LIMIT $2"
            );
            sqlx::query_as::<_, Magazine>(&sql)
                .bind(before)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql =
                format!("SELECT {MAGAZINE_COLUMNS} FROM magazines ORDER BY id {dir} LIMIT $1");
            sqlx::query_as::<_, Magazine>(&sql)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(rows)
    }

    async fn insert(&self, draft: &CreateMagazine) -> Result<DbId, StoreError> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO magazines (title, image_url, website_url)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&draft.title)
        .bind(&draft.image_url)
        .bind(&draft.website_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, record: &Magazine) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE magazines SET title = $2, image_url = $3, website_url = $4 WHERE id = $1",
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.image_url)
        .bind(&record.website_url)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(Magazine::ENTITY, record.id));
        }
        Ok(())
    }

    async fn delete(&self, id: &DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM magazines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(Magazine::ENTITY, *id));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// recognitions
// ---------------------------------------------------------------------------

const RECOGNITION_COLUMNS: &str = "id, title, link, year, month, day";

#[async_trait]
impl RemoteStore<Recognition> for PgStore {
    async fn select(&self, query: &Query<DbId>) -> Result<Vec<Recognition>, StoreError> {
        let limit = effective_limit(query.limit);
        let dir = order_keyword(query.direction);

        let rows = if let Some(before) = query.before_id {
            let sql = format!(
                "SELECT {RECOGNITION_COLUMNS} FROM recognitions WHERE id < $1 ORDER BY id {dir} LIMIT $2"
            );
            sqlx::query_as::<_, Recognition>(&sql)
                .bind(before)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql = format!(
                "SELECT {RECOGNITION_COLUMNS} FROM recognitions ORDER BY id {dir} LIMIT $1"
            );
            sqlx::query_as::<_, Recognition>(&sql)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(rows)
    }

    async fn insert(&self, draft: &CreateRecognition) -> Result<DbId, StoreError> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO recognitions (title, link, year, month, day)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&draft.title)
        .bind(&draft.link)
        .bind(draft.year)
        .bind(draft.month)
        .bind(draft.day)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, record: &Recognition) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE recognitions SET title = $2, link = $3, year = $4, month = $5, day = $6
             WHERE id = $1",
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.link)
        .bind(record.year)
        .bind(record.month)
        .bind(record.day)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(Recognition::ENTITY, record.id));
        }
        Ok(())
    }

    async fn delete(&self, id: &DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM recognitions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(Recognition::ENTITY, *id));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// sponsors
// ---------------------------------------------------------------------------

const SPONSOR_COLUMNS: &str = "id, name, image_url, website_url";

#[async_trait]
impl RemoteStore<Sponsor> for PgStore {
    async fn select(&self, query: &Query<DbId>) -> Result<Vec<Sponsor>, StoreError> {
        let limit = effective_limit(query.limit);
        let dir = order_keyword(query.direction);

        let rows = if let Some(before) = query.before_id {
            let sql = format!(
                "SELECT {SPONSOR_COLUMNS} FROM sponsors WHERE id < $1 ORDER BY id {dir} LIMIT $2"
            );
            sqlx::query_as::<_, Sponsor>(&sql)
                .bind(before)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql = format!("SELECT {SPONSOR_COLUMNS} FROM sponsors ORDER BY id {dir} LIMIT $1");
            sqlx::query_as::<_, Sponsor>(&sql)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(rows)
    }

    async fn insert(&self, draft: &CreateSponsor) -> Result<DbId, StoreError> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO sponsors (name, image_url, website_url)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.image_url)
        .bind(&draft.website_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, record: &Sponsor) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE sponsors SET name = $2, image_url = $3, website_url = $4 WHERE id = $1",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.image_url)
        .bind(&record.website_url)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(Sponsor::ENTITY, record.id));
        }
        Ok(())
    }

    async fn delete(&self, id: &DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM sponsors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(Sponsor::ENTITY, *id));
        }
        Ok(())
    }
}
