//! Task entities

use crate::classification::result::ClassificationResult;
use crate::core::error::DomainError;
use crate::core::quadrant::{Quadrant, QuadrantFlags};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored task row (Entity)
///
/// `quadrant` is optional: older rows only carry the flags, in which case
/// the quadrant is derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub quadrant: Option<Quadrant>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn flags(&self) -> QuadrantFlags {
        QuadrantFlags::new(self.urgent, self.important)
    }

    /// Quadrant the task is shown in
    pub fn effective_quadrant(&self) -> Quadrant {
        Quadrant::resolve(self.quadrant, self.flags())
    }

    /// Move the task to `quadrant`, rewriting both flags from it.
    pub fn move_to(&mut self, quadrant: Quadrant) {
        let flags = quadrant.flags();
        self.urgent = flags.urgent;
        self.important = flags.important;
        self.quadrant = Some(quadrant);
    }

    /// Replace both flags.
    ///
    /// A stored quadrant is cleared so the board follows the new flags.
    pub fn set_flags(&mut self, flags: QuadrantFlags) {
        self.urgent = flags.urgent;
        self.important = flags.important;
        self.quadrant = None;
    }

    pub fn toggle_urgent(&mut self) {
        self.set_flags(QuadrantFlags::new(!self.urgent, self.important));
    }

    pub fn toggle_important(&mut self) {
        self.set_flags(QuadrantFlags::new(self.urgent, !self.important));
    }

    /// Apply an edit. Nothing changes unless the whole update is valid.
    pub fn apply(&mut self, update: TaskUpdate) -> Result<(), DomainError> {
        if update.is_empty() {
            return Err(DomainError::NothingToUpdate);
        }

        let title = match update.title.as_deref().map(str::trim) {
            Some("") => return Err(DomainError::EmptyTitle),
            other => other.map(str::to_string),
        };

        if let Some(title) = title {
            self.title = title;
        }
        if update.urgent.is_some() || update.important.is_some() {
            self.set_flags(QuadrantFlags::new(
                update.urgent.unwrap_or(self.urgent),
                update.important.unwrap_or(self.important),
            ));
        }
        Ok(())
    }
}

/// Changes to an existing task; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub urgent: Option<bool>,
    pub important: Option<bool>,
}

impl TaskUpdate {
    /// Build an update from form-style values (see [`parse_flag`]).
    pub fn from_form(title: Option<&str>, urgent: Option<&str>, important: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            urgent: urgent.map(|v| parse_flag(Some(v), false)),
            important: important.map(|v| parse_flag(Some(v), false)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.urgent.is_none() && self.important.is_none()
    }
}

/// A task about to be created (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    title: String,
    flags: QuadrantFlags,
}

impl NewTask {
    /// Create a new task, trimming the title.
    pub fn new(title: &str, flags: QuadrantFlags) -> Result<Self, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            flags,
        })
    }

    /// Create a task with the flags derived from a classification.
    pub fn from_classification(
        title: &str,
        result: &ClassificationResult,
    ) -> Result<Self, DomainError> {
        Self::new(title, result.flags())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn flags(&self) -> QuadrantFlags {
        self.flags
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_flags(self.flags)
    }
}

/// Parse a form-style boolean value.
///
/// `"true"`, `"on"` and `"1"` (any case) are true; any other value is false.
/// A missing value yields `default`.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(v) => matches!(v.to_lowercase().as_str(), "true" | "on" | "1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(urgent: bool, important: bool, quadrant: Option<Quadrant>) -> Task {
        Task {
            id: "t1".to_string(),
            title: "task".to_string(),
            urgent,
            important,
            quadrant,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_quadrant_from_flags() {
        assert_eq!(task(true, true, None).effective_quadrant(), Quadrant::A);
        assert_eq!(task(false, true, None).effective_quadrant(), Quadrant::B);
        assert_eq!(task(true, false, None).effective_quadrant(), Quadrant::C);
        assert_eq!(task(false, false, None).effective_quadrant(), Quadrant::D);
    }

    #[test]
    fn test_stored_quadrant_wins() {
        assert_eq!(
            task(false, false, Some(Quadrant::A)).effective_quadrant(),
            Quadrant::A
        );
    }

    #[test]
    fn test_move_to_rewrites_flags() {
        let mut t = task(false, false, None);
        t.move_to(Quadrant::C);
        assert_eq!(t.quadrant, Some(Quadrant::C));
        assert_eq!(t.flags(), QuadrantFlags::new(true, false));

        t.move_to(Quadrant::B);
        assert_eq!(t.flags(), QuadrantFlags::new(false, true));
        assert_eq!(t.effective_quadrant(), Quadrant::B);
    }

    #[test]
    fn test_toggles_move_task_between_quadrants() {
        let mut t = task(false, true, Some(Quadrant::B));
        t.toggle_urgent();
        assert!(t.urgent);
        assert_eq!(t.quadrant, None);
        assert_eq!(t.effective_quadrant(), Quadrant::A);

        t.toggle_important();
        assert_eq!(t.effective_quadrant(), Quadrant::C);
        t.toggle_urgent();
        assert_eq!(t.effective_quadrant(), Quadrant::D);
    }

    #[test]
    fn test_apply_form_update() {
        let mut t = task(true, true, Some(Quadrant::A));
        t.apply(TaskUpdate::from_form(Some("  決済バグ修正  "), Some("off"), None))
            .unwrap();
        assert_eq!(t.title, "決済バグ修正");
        assert!(!t.urgent);
        assert!(t.important);
        assert_eq!(t.effective_quadrant(), Quadrant::B);
    }

    #[test]
    fn test_apply_title_only_keeps_quadrant() {
        let mut t = task(false, false, Some(Quadrant::A));
        t.apply(TaskUpdate::from_form(Some("renamed"), None, None))
            .unwrap();
        assert_eq!(t.quadrant, Some(Quadrant::A));
    }

    #[test]
    fn test_apply_rejects_empty_and_blank_updates() {
        let mut t = task(true, false, None);
        let before = t.clone();

        assert_eq!(
            t.apply(TaskUpdate::default()).unwrap_err(),
            DomainError::NothingToUpdate
        );
        assert_eq!(
            t.apply(TaskUpdate::from_form(Some("  "), Some("true"), Some("true")))
                .unwrap_err(),
            DomainError::EmptyTitle
        );
        assert_eq!(t, before);
    }

    #[test]
    fn test_new_task_trims_title() {
        let t = NewTask::new("  ship landing page  ", QuadrantFlags::default()).unwrap();
        assert_eq!(t.title(), "ship landing page");
        assert_eq!(t.quadrant(), Quadrant::D);
    }

    #[test]
    fn test_new_task_rejects_blank_title() {
        assert_eq!(
            NewTask::new("   ", QuadrantFlags::default()).unwrap_err(),
            DomainError::EmptyTitle
        );
    }

    #[test]
    fn test_from_classification_applies_flags() {
        let result = ClassificationResult {
            quadrant: Quadrant::B,
            confidence: 80,
            reasoning: String::new(),
        };
        let t = NewTask::from_classification("A/Bテスト", &result).unwrap();
        assert_eq!(t.flags(), QuadrantFlags::new(false, true));
        assert_eq!(t.quadrant(), Quadrant::B);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true"), false));
        assert!(parse_flag(Some("ON"), false));
        assert!(parse_flag(Some("1"), false));
        assert!(!parse_flag(Some("yes"), true));
        assert!(!parse_flag(Some("false"), true));
        assert!(parse_flag(None, true));
        assert!(!parse_flag(None, false));
    }

    #[test]
    fn test_deserialize_row_without_quadrant() {
        let json = r#"{
            "id": "42",
            "title": "決済バグ修正",
            "urgent": true,
            "important": true,
            "quadrant": null,
            "created_at": "2025-01-10T09:00:00Z"
        }"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.quadrant, None);
        assert_eq!(t.effective_quadrant(), Quadrant::A);
    }
}
