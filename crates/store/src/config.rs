//! Store configuration loaded from environment variables.
//!
//! All fields have defaults suitable for local development; override via
//! environment variables in production.

/// Document store endpoint configuration.
#[derive(Debug, Clone)]
pub struct DocStoreConfig {
    /// Base HTTP URL of the document store, without a trailing slash
    /// (default: `http://localhost:8089`).
    pub base_url: String,
}

impl DocStoreConfig {
    /// Load from `FOLIO_DOCSTORE_URL`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("FOLIO_DOCSTORE_URL")
            .unwrap_or_else(|_| "http://localhost:8089".into());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Relational store configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection URL (default: `postgres://localhost/folio`).
    pub database_url: String,
    /// Connection pool size (default: `20`).
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load from `DATABASE_URL` and `FOLIO_DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/folio".into());

        let max_connections: u32 = std::env::var("FOLIO_DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("FOLIO_DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            database_url,
            max_connections,
        }
    }
}
