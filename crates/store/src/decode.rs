//! Explicit decode step at the document-store boundary.
//!
//! Raw documents arrive as an id plus a JSON field object. Every read path
//! goes through [`Document::decode`], which produces a fully populated
//! typed entity (absent optional fields filled with defaults) or a
//! [`StoreError::Decode`]. Nothing downstream ever sees a partial entity.

use serde::de::DeserializeOwned;
use serde_json::Value;

use folio_core::content::ContentItem;
use folio_core::project::{display_date, Project};
use folio_core::types::{DocId, Timestamp};

use crate::error::StoreError;
use crate::record::Document;

/// Inject the document id into the field object and deserialize.
pub fn from_fields<T: DeserializeOwned>(id: DocId, fields: Value) -> Result<T, StoreError> {
    let Value::Object(mut map) = fields else {
        return Err(StoreError::Decode(
            "document fields must be a JSON object".to_string(),
        ));
    };
    map.insert("id".to_string(), Value::String(id));
    serde_json::from_value(Value::Object(map)).map_err(|e| StoreError::Decode(e.to_string()))
}

impl Document for Project {
    const COLLECTION: &'static str = "projects";

    /// Projects written by older clients may lack a display `date`; fall
    /// back to formatting the stored `createdAt` timestamp, else leave the
    /// serde default (empty string).
    fn decode(id: DocId, mut fields: Value) -> Result<Self, StoreError> {
        if let Value::Object(map) = &mut fields {
            let has_date = matches!(map.get("date"), Some(Value::String(s)) if !s.is_empty());
            if !has_date {
                if let Some(Value::String(raw)) = map.get("createdAt") {
                    if let Ok(ts) = raw.parse::<Timestamp>() {
                        map.insert("date".to_string(), Value::String(display_date(ts)));
                    }
                }
            }
        }
        from_fields(id, fields)
    }
}

impl Document for ContentItem {
    const COLLECTION: &'static str = "homepage_content";
}
