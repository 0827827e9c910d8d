//! Project entity, creation draft, and editor-side validation.
//!
//! Validation runs synchronously in the form layer and never reaches the
//! remote store; the limits match what the public editor enforces.

use serde::{Deserialize, Serialize};
use validator::ValidateUrl;

use crate::error::CoreError;
use crate::types::{DocId, Timestamp};

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Minimum length of a project title.
pub const TITLE_MIN_CHARS: usize = 3;

/// Minimum length of a project description.
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// Minimum length of an author name.
pub const AUTHOR_MIN_CHARS: usize = 2;

/// Minimum length of a step title.
pub const STEP_TITLE_MIN_CHARS: usize = 2;

/// Minimum length of step content.
pub const STEP_CONTENT_MIN_CHARS: usize = 5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One build step of a project. Order is meaningful (rendered as "Step N");
/// titles need not be unique. `content` is opaque markup produced by the
/// rich-text editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub content: String,
}

impl Step {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A user-created project as held in the document store.
///
/// `date` is a display string fixed at creation time and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: DocId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub image: String,
    #[serde(default)]
    pub url: String,
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Insert payload for a new project: everything but the store-assigned id.
/// The display `date` is stamped by the editor before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub image: String,
    #[serde(default)]
    pub url: String,
    pub author: String,
    pub date: String,
    pub steps: Vec<Step>,
}

// ---------------------------------------------------------------------------
// Display date
// ---------------------------------------------------------------------------

/// Format a timestamp as the fixed display date stored on a project at
/// creation time, e.g. "January 5, 2026".
pub fn display_date(ts: Timestamp) -> String {
    ts.format("%B %-d, %Y").to_string()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a project title (>= 3 characters after trimming).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().chars().count() < TITLE_MIN_CHARS {
        return Err(CoreError::Validation(format!(
            "Title must be at least {TITLE_MIN_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate a project description (>= 10 characters after trimming).
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().chars().count() < DESCRIPTION_MIN_CHARS {
        return Err(CoreError::Validation(format!(
            "Description must be at least {DESCRIPTION_MIN_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate an author name (>= 2 characters after trimming).
pub fn validate_author(author: &str) -> Result<(), CoreError> {
    if author.trim().chars().count() < AUTHOR_MIN_CHARS {
        return Err(CoreError::Validation("Author is required".to_string()));
    }
    Ok(())
}

/// Validate the required image URL.
pub fn validate_image_url(image: &str) -> Result<(), CoreError> {
    if !image.validate_url() {
        return Err(CoreError::Validation(
            "Image must be a valid URL".to_string(),
        ));
    }
    Ok(())
}

/// Validate the optional project link: empty is allowed, anything else must
/// be a valid URL.
pub fn validate_project_url(url: &str) -> Result<(), CoreError> {
    if url.is_empty() {
        return Ok(());
    }
    if !url.validate_url() {
        return Err(CoreError::Validation(
            "Project link must be a valid URL".to_string(),
        ));
    }
    Ok(())
}

/// Validate a single step (title >= 2 chars, content >= 5 chars).
pub fn validate_step(step: &Step) -> Result<(), CoreError> {
    if step.title.trim().chars().count() < STEP_TITLE_MIN_CHARS {
        return Err(CoreError::Validation("Step title required".to_string()));
    }
    if step.content.trim().chars().count() < STEP_CONTENT_MIN_CHARS {
        return Err(CoreError::Validation("Step details required".to_string()));
    }
    Ok(())
}

/// Validate the full step list: at least one step, each step valid.
pub fn validate_steps(steps: &[Step]) -> Result<(), CoreError> {
    if steps.is_empty() {
        return Err(CoreError::Validation(
            "At least one step is required".to_string(),
        ));
    }
    for step in steps {
        validate_step(step)?;
    }
    Ok(())
}

/// Validate a complete creation draft.
pub fn validate_draft(draft: &ProjectDraft) -> Result<(), CoreError> {
    validate_title(&draft.title)?;
    validate_description(&draft.description)?;
    validate_author(&draft.author)?;
    validate_image_url(&draft.image)?;
    validate_project_url(&draft.url)?;
    validate_steps(&draft.steps)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProjectDraft {
        ProjectDraft {
            title: "Macro keypad".to_string(),
            description: "A hand-wired macro keypad build".to_string(),
            content: String::new(),
            image: "https://example.com/keypad.jpg".to_string(),
            url: String::new(),
            author: "Mukesh".to_string(),
            date: "January 5, 2026".to_string(),
            steps: vec![Step::new("Gather parts", "Switches, diodes, and an MCU")],
        }
    }

    // -- display date --------------------------------------------------------

    #[test]
    fn display_date_long_form() {
        let ts = chrono::DateTime::parse_from_rfc3339("2026-01-05T08:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(display_date(ts), "January 5, 2026");
    }

    // -- field validators ----------------------------------------------------

    #[test]
    fn title_too_short_rejected() {
        assert!(validate_title("ab").is_err());
        assert!(validate_title("  ab  ").is_err());
        assert!(validate_title("abc").is_ok());
    }

    #[test]
    fn description_too_short_rejected() {
        assert!(validate_description("short").is_err());
        assert!(validate_description("long enough text").is_ok());
    }

    #[test]
    fn author_required() {
        assert!(validate_author("").is_err());
        assert!(validate_author("M").is_err());
        assert!(validate_author("Mo").is_ok());
    }

    #[test]
    fn image_must_be_url() {
        assert!(validate_image_url("not a url").is_err());
        assert!(validate_image_url("").is_err());
        assert!(validate_image_url("https://example.com/a.png").is_ok());
    }

    #[test]
    fn project_url_empty_allowed() {
        assert!(validate_project_url("").is_ok());
        assert!(validate_project_url("https://example.com").is_ok());
        assert!(validate_project_url("nope").is_err());
    }

    // -- steps ---------------------------------------------------------------

    #[test]
    fn empty_step_list_rejected() {
        assert!(validate_steps(&[]).is_err());
    }

    #[test]
    fn blank_step_rejected() {
        let steps = vec![Step::default()];
        assert!(validate_steps(&steps).is_err());
    }

    #[test]
    fn valid_steps_accepted() {
        let steps = vec![
            Step::new("Print the case", "Use PETG at 0.2mm layers"),
            Step::new("Flash firmware", "QMK with the default keymap"),
        ];
        assert!(validate_steps(&steps).is_ok());
    }

    // -- full draft ----------------------------------------------------------

    #[test]
    fn complete_draft_accepted() {
        assert!(validate_draft(&draft()).is_ok());
    }

    #[test]
    fn draft_with_bad_image_rejected() {
        let mut d = draft();
        d.image = "keypad.jpg".to_string();
        assert!(validate_draft(&d).is_err());
    }

    #[test]
    fn draft_without_steps_rejected() {
        let mut d = draft();
        d.steps.clear();
        assert!(validate_draft(&d).is_err());
    }

    // -- serde defaults ------------------------------------------------------

    #[test]
    fn project_deserializes_with_missing_optionals() {
        let json = serde_json::json!({
            "id": "abc123",
            "title": "Macro keypad",
            "description": "A build log",
            "image": "https://example.com/a.jpg",
            "author": "Mukesh",
            "date": "January 5, 2026",
        });
        let project: Project = serde_json::from_value(json).unwrap();
        assert_eq!(project.content, "");
        assert_eq!(project.url, "");
        assert!(project.steps.is_empty());
    }
}
