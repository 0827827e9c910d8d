//! Homepage content items: kinds, entity, draft, and validation.
//!
//! A content item is one homepage-display record of a fixed category. The
//! store-assigned id is the sole identity key for update and delete.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DocId, Timestamp};

// ---------------------------------------------------------------------------
// Kind constants
// ---------------------------------------------------------------------------

pub const KIND_ACHIEVEMENT: &str = "achievement";
pub const KIND_RECOGNITION: &str = "recognition";
pub const KIND_MAGAZINE: &str = "magazine";
pub const KIND_SPONSOR: &str = "sponsor";

/// All valid content item kinds.
pub const VALID_CONTENT_KINDS: &[&str] = &[
    KIND_ACHIEVEMENT,
    KIND_RECOGNITION,
    KIND_MAGAZINE,
    KIND_SPONSOR,
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A homepage content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: DocId,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

/// Insert payload for a new content item. `created_at` is stamped by the
/// admin panel at save time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a content kind against the known set.
pub fn validate_kind(kind: &str) -> Result<(), CoreError> {
    if !VALID_CONTENT_KINDS.contains(&kind) {
        return Err(CoreError::Validation(format!(
            "Invalid content kind '{}'. Valid kinds: {}",
            kind,
            VALID_CONTENT_KINDS.join(", ")
        )));
    }
    Ok(())
}

/// Validate a content item title (required, <= 200 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title and kind are required".to_string(),
        ));
    }
    if title.chars().count() > 200 {
        return Err(CoreError::Validation(
            "Title must be at most 200 characters".to_string(),
        ));
    }
    Ok(())
}

/// Validate a complete content draft (title and kind required).
pub fn validate_draft(draft: &ContentDraft) -> Result<(), CoreError> {
    validate_title(&draft.title)?;
    validate_kind(&draft.kind)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
