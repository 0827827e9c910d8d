//! Multi-step project editor.
//!
//! Form state for creating a project: scalar fields, the ordered step
//! list, synchronous validation, and submission through an
//! [`OptimisticCollection`]. The "minimum one step" policy lives here,
//! not in the step list itself.

use chrono::Utc;

use folio_core::error::CoreError;
use folio_core::project::{self, display_date, Project, ProjectDraft, Step};
use folio_core::steps::StepListEditor;
use folio_feed::OptimisticCollection;
use folio_store::RemoteStore;

use crate::notice::Notice;

/// Editable form state for a new project.
#[derive(Debug, Clone, Default)]
pub struct ProjectEditor {
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: String,
    pub image: String,
    pub url: String,
    steps: StepListEditor,
}

impl ProjectEditor {
    /// A fresh form starts with one blank step.
    pub fn new() -> Self {
        Self {
            steps: StepListEditor::with_steps(vec![Step::default()]),
            ..Self::default()
        }
    }

    // ---- step list management ----

    /// Append a blank step.
    pub fn add_step(&mut self) {
        self.steps.append(Step::default());
    }

    /// Replace the step at `index`.
    pub fn set_step(&mut self, index: usize, step: Step) -> Result<(), CoreError> {
        self.steps.set_at(index, step)
    }

    /// Remove the step at `index`. The last remaining step cannot be
    /// removed.
    pub fn remove_step(&mut self, index: usize) -> Result<(), CoreError> {
        if !self.can_remove_step() {
            return Err(CoreError::Validation(
                "At least one step is required".to_string(),
            ));
        }
        self.steps.remove_at(index).map(|_| ())
    }

    /// Whether the UI should offer removal (more than one step present).
    pub fn can_remove_step(&self) -> bool {
        self.steps.len() > 1
    }

    pub fn steps(&self) -> &[Step] {
        self.steps.steps()
    }

    // ---- validation and submission ----

    /// Check every field against the editor rules. Runs synchronously and
    /// never reaches the store.
    pub fn validate(&self) -> Result<(), CoreError> {
        project::validate_title(&self.title)?;
        project::validate_description(&self.description)?;
        project::validate_author(&self.author)?;
        project::validate_image_url(&self.image)?;
        project::validate_project_url(&self.url)?;
        project::validate_steps(self.steps.steps())?;
        Ok(())
    }

    /// Build the insert payload, stamping the display date from now.
    /// The date is fixed at creation and never recomputed.
    fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            content: self.content.clone(),
            image: self.image.clone(),
            url: self.url.clone(),
            author: self.author.clone(),
            date: display_date(Utc::now()),
            steps: self.steps.steps().to_vec(),
        }
    }

    /// Validate and submit the form. On success the new project sits at
    /// the head of `collection` and the form is reset; on failure the
    /// form is kept for the user to fix and resubmit.
    pub async fn submit<S>(
        &mut self,
        collection: &OptimisticCollection<Project, S>,
    ) -> Notice
    where
        S: RemoteStore<Project>,
    {
        if let Err(err) = self.validate() {
            return Notice::error("Error", err.to_string());
        }

        match collection.create(self.draft()).await {
            Ok(project) => {
                tracing::info!(id = %project.id, "Project created");
                *self = Self::new();
                Notice::success("Project created successfully!")
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create project");
                Notice::error("Error", "There was a problem creating the project.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_editor() -> ProjectEditor {
        let mut editor = ProjectEditor::new();
        editor.title = "Macro keypad".to_string();
        editor.description = "A hand-wired macro keypad build".to_string();
        editor.author = "Mukesh".to_string();
        editor.image = "https://example.com/keypad.jpg".to_string();
        editor
            .set_step(0, Step::new("Gather parts", "Switches, diodes, and an MCU"))
            .unwrap();
        editor
    }

    #[test]
    fn new_editor_has_one_blank_step() {
        let editor = ProjectEditor::new();
        assert_eq!(editor.steps().len(), 1);
        assert!(!editor.can_remove_step());
    }

    #[test]
    fn last_step_cannot_be_removed() {
        let mut editor = ProjectEditor::new();
        assert!(editor.remove_step(0).is_err());

        editor.add_step();
        assert!(editor.can_remove_step());
        editor.remove_step(0).unwrap();
        assert_eq!(editor.steps().len(), 1);
    }

    #[test]
    fn validate_accepts_a_complete_form() {
        assert!(filled_editor().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_steps() {
        let mut editor = filled_editor();
        editor.add_step();
        assert!(editor.validate().is_err());
    }

    #[test]
    fn draft_stamps_a_display_date() {
        let draft = filled_editor().draft();
        // "Month D, YYYY" always contains a comma and a space.
        assert!(draft.date.contains(", "));
        assert_eq!(draft.steps.len(), 1);
    }
}
