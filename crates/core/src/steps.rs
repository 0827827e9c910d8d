//! Ordered step-list editing for the project editor.
//!
//! Pure index-based list management. The "minimum one step" policy is NOT
//! enforced here; it belongs to the form layer that owns the list.

use crate::error::CoreError;
use crate::project::Step;

/// Editable, ordered list of project steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepListEditor {
    steps: Vec<Step>,
}

impl StepListEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor seeded with existing steps.
    pub fn with_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Replace the step at `index`.
    pub fn set_at(&mut self, index: usize, step: Step) -> Result<(), CoreError> {
        let slot = self.steps.get_mut(index).ok_or_else(|| {
            CoreError::Validation(format!("No step at index {index}"))
        })?;
        *slot = step;
        Ok(())
    }

    /// Append a step at the tail.
    pub fn append(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Remove the step at `index`, shifting subsequent indices down.
    /// Returns the removed step.
    pub fn remove_at(&mut self, index: usize) -> Result<Step, CoreError> {
        if index >= self.steps.len() {
            return Err(CoreError::Validation(format!("No step at index {index}")));
        }
        Ok(self.steps.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> StepListEditor {
        StepListEditor::with_steps(vec![
            Step::new("one", "first"),
            Step::new("two", "second"),
            Step::new("three", "third"),
        ])
    }

    #[test]
    fn set_at_replaces_in_place() {
        let mut e = editor();
        e.set_at(1, Step::new("TWO", "rewritten")).unwrap();
        assert_eq!(e.len(), 3);
        assert_eq!(e.get(1).unwrap().title, "TWO");
        assert_eq!(e.get(0).unwrap().title, "one");
    }

    #[test]
    fn set_at_out_of_range_is_error() {
        let mut e = editor();
        assert!(e.set_at(3, Step::default()).is_err());
    }

    #[test]
    fn append_adds_to_tail() {
        let mut e = editor();
        e.append(Step::new("four", "fourth"));
        assert_eq!(e.len(), 4);
        assert_eq!(e.get(3).unwrap().title, "four");
    }

    #[test]
    fn remove_at_shifts_down() {
        let mut e = editor();
        let removed = e.remove_at(0).unwrap();
        assert_eq!(removed.title, "one");
        assert_eq!(e.len(), 2);
        assert_eq!(e.get(0).unwrap().title, "two");
    }

    #[test]
    fn remove_at_out_of_range_is_error() {
        let mut e = StepListEditor::new();
        assert!(e.remove_at(0).is_err());
    }
}
