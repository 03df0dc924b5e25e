//! Edit Task use case
//!
//! Moves a task to another quadrant, toggles its flags or applies a form
//! update. Edits target one task by id inside a loaded task list.

use quadrant_domain::{DomainError, Quadrant, Task, TaskUpdate};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while editing a task
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditTaskError {
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A single change to a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEdit {
    /// Drop onto a quadrant; both flags follow the quadrant
    Move(Quadrant),
    ToggleUrgent,
    ToggleImportant,
    Update(TaskUpdate),
}

/// Use case for editing stored tasks
#[derive(Debug, Clone, Default)]
pub struct EditTaskUseCase;

impl EditTaskUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Apply `edit` to the task with `id` and return its updated state.
    pub fn execute(
        &self,
        tasks: &mut [Task],
        id: &str,
        edit: TaskEdit,
    ) -> Result<Task, EditTaskError> {
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| EditTaskError::NotFound(id.to_string()))?;

        let before = task.effective_quadrant();
        match edit {
            TaskEdit::Move(quadrant) => task.move_to(quadrant),
            TaskEdit::ToggleUrgent => task.toggle_urgent(),
            TaskEdit::ToggleImportant => task.toggle_important(),
            TaskEdit::Update(update) => task.apply(update)?,
        }

        info!(
            "Task {}: quadrant {} -> {} (urgent={}, important={})",
            id,
            before,
            task.effective_quadrant(),
            task.urgent,
            task.important
        );
        Ok(task.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tasks() -> Vec<Task> {
        ["1", "2"]
            .into_iter()
            .map(|id| Task {
                id: id.to_string(),
                title: format!("task {}", id),
                urgent: false,
                important: false,
                quadrant: None,
                created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_move_sets_quadrant_and_flags() {
        let mut tasks = tasks();
        let moved = EditTaskUseCase::new()
            .execute(&mut tasks, "2", TaskEdit::Move(Quadrant::A))
            .unwrap();

        assert_eq!(moved.quadrant, Some(Quadrant::A));
        assert!(moved.urgent && moved.important);
        assert_eq!(tasks[1], moved);
        // Other rows untouched
        assert_eq!(tasks[0].effective_quadrant(), Quadrant::D);
    }

    #[test]
    fn test_toggles() {
        let mut tasks = tasks();
        let uc = EditTaskUseCase::new();

        let t = uc.execute(&mut tasks, "1", TaskEdit::ToggleImportant).unwrap();
        assert_eq!(t.effective_quadrant(), Quadrant::B);
        let t = uc.execute(&mut tasks, "1", TaskEdit::ToggleUrgent).unwrap();
        assert_eq!(t.effective_quadrant(), Quadrant::A);
    }

    #[test]
    fn test_form_update() {
        let mut tasks = tasks();
        let t = EditTaskUseCase::new()
            .execute(
                &mut tasks,
                "1",
                TaskEdit::Update(TaskUpdate::from_form(None, Some("on"), Some("1"))),
            )
            .unwrap();
        assert_eq!(t.effective_quadrant(), Quadrant::A);
    }

    #[test]
    fn test_unknown_id() {
        let mut tasks = tasks();
        let err = EditTaskUseCase::new()
            .execute(&mut tasks, "99", TaskEdit::ToggleUrgent)
            .unwrap_err();
        assert_eq!(err, EditTaskError::NotFound("99".to_string()));
    }

    #[test]
    fn test_empty_update_is_refused() {
        let mut tasks = tasks();
        let err = EditTaskUseCase::new()
            .execute(&mut tasks, "1", TaskEdit::Update(TaskUpdate::default()))
            .unwrap_err();
        assert_eq!(err, EditTaskError::Domain(DomainError::NothingToUpdate));
    }
}
