/// Errors from the remote store boundary.
///
/// Whether a failure is retried is decided by the consuming component;
/// nothing here retries automatically.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The document store returned a non-2xx status code.
    #[error("Store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The store rejected the caller's credentials or rules.
    #[error("Permission denied: {0}")]
    Permission(String),

    /// No record with the given identity exists.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A relational store error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A document could not be decoded into its typed entity.
    #[error("Decode failed: {0}")]
    Decode(String),
}
