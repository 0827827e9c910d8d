//! HTTP client for the hosted JSON document store.
//!
//! Documents travel as an opaque id plus a JSON field object; every read
//! goes through the typed decode step in [`crate::decode`]. The client
//! wraps [`reqwest`] and maps HTTP failures onto [`StoreError`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::DocStoreConfig;
use crate::error::StoreError;
use crate::query::{Direction, OrderField, Query};
use crate::record::{Document, RemoteStore};

/// HTTP client for one document store endpoint.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
}

/// One raw document in a list or single-document response.
#[derive(Debug, Deserialize)]
struct RawDocument {
    id: String,
    fields: serde_json::Value,
}

/// Response body of a collection query.
#[derive(Debug, Deserialize)]
struct ListResponse {
    documents: Vec<RawDocument>,
}

/// Response body of an insert.
#[derive(Debug, Deserialize)]
struct InsertResponse {
    id: String,
}

/// Request body of an insert or update.
#[derive(Debug, Serialize)]
struct WriteRequest {
    fields: serde_json::Value,
}

impl RestStore {
    /// Create a client for the given base URL, e.g. `http://host:8089`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from environment configuration.
    pub fn from_config(config: &DocStoreConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across stores).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, mapping the failure
    /// classes the store distinguishes (permission, missing document) onto
    /// their own [`StoreError`] variants.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(match status.as_u16() {
            401 | 403 => StoreError::Permission(body),
            404 => StoreError::NotFound(body),
            code => StoreError::Api { status: code, body },
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<R: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<R, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<R>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        Self::ensure_success(response).await?;
        Ok(())
    }

    fn query_params(query: &Query<String>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (
                "order",
                match query.order_by {
                    OrderField::Id => "id".to_string(),
                    OrderField::CreatedAt => "createdAt".to_string(),
                },
            ),
            (
                "dir",
                match query.direction {
                    Direction::Ascending => "asc".to_string(),
                    Direction::Descending => "desc".to_string(),
                },
            ),
        ];
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(before) = &query.before_id {
            params.push(("before", before.clone()));
        }
        params
    }
}

#[async_trait]
impl<T> RemoteStore<T> for RestStore
where
    T: Document,
    T::Draft: Serialize,
{
    async fn select(&self, query: &Query<String>) -> Result<Vec<T>, StoreError> {
        tracing::debug!(collection = T::COLLECTION, ?query, "Document store select");

        let response = self
            .client
            .get(self.collection_url(T::COLLECTION))
            .query(&Self::query_params(query))
            .send()
            .await?;

        let list: ListResponse = Self::parse_response(response).await?;
        list.documents
            .into_iter()
            .map(|doc| T::decode(doc.id, doc.fields))
            .collect()
    }

    async fn insert(&self, draft: &T::Draft) -> Result<String, StoreError> {
        let fields =
            serde_json::to_value(draft).map_err(|e| StoreError::Decode(e.to_string()))?;

        let response = self
            .client
            .post(self.collection_url(T::COLLECTION))
            .json(&WriteRequest { fields })
            .send()
            .await?;

        let created: InsertResponse = Self::parse_response(response).await?;
        tracing::debug!(
            collection = T::COLLECTION,
            id = %created.id,
            "Document inserted"
        );
        Ok(created.id)
    }

    async fn update(&self, record: &T) -> Result<(), StoreError> {
        let id = record.id();
        let mut fields =
            serde_json::to_value(record).map_err(|e| StoreError::Decode(e.to_string()))?;
        // The id travels in the path, not the field object.
        if let Some(map) = fields.as_object_mut() {
            map.remove("id");
        }

        let response = self
            .client
            .patch(self.document_url(T::COLLECTION, &id))
            .json(&WriteRequest { fields })
            .send()
            .await?;

        Self::check_status(response).await
    }

    async fn delete(&self, id: &String) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.document_url(T::COLLECTION, id))
            .send()
            .await?;

        Self::check_status(response).await
    }
}
