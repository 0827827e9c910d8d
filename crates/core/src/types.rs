/// Relational primary keys are BIGSERIAL, assigned in creation order.
pub type DbId = i64;

/// Document-store identifiers are opaque, store-assigned strings.
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
