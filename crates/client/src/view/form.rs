//! Create/edit form state shared by the add and edit views

use chrono::NaiveDate;
use thiserror::Error;

use todo_core::task::TaskStatus;

use crate::client::{NewTodo, TodoPatch};

/// Why a form submission was rejected client-side
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Title is required")]
    TitleRequired,
}

/// Field state for the creation and edit forms
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
}

impl TaskForm {
    /// Title is the only required field, on both forms
    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::TitleRequired);
        }
        Ok(())
    }

    /// Build a creation payload; blank description is omitted
    pub fn into_create(self) -> Result<NewTodo, FormError> {
        self.validate()?;
        Ok(NewTodo {
            title: self.title.trim().to_string(),
            description: non_blank(self.description),
            due_date: self.due_date,
            status: self.status,
        })
    }

    /// Build a partial update containing only the filled-in fields
    ///
    /// Blank text fields are dropped rather than sent as empty strings; the
    /// service would ignore them anyway.
    pub fn into_patch(self) -> TodoPatch {
        TodoPatch {
            title: non_blank(self.title),
            description: non_blank(self.description),
            due_date: self.due_date,
            status: self.status,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_title() {
        let form = TaskForm {
            title: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::TitleRequired));
        assert_eq!(form.into_create().unwrap_err(), FormError::TitleRequired);
    }

    #[test]
    fn test_into_create_trims_title_and_drops_blank_description() {
        let form = TaskForm {
            title: "  Buy milk  ".to_string(),
            description: "   ".to_string(),
            ..Default::default()
        };
        let payload = form.into_create().unwrap();
        assert_eq!(payload.title, "Buy milk");
        assert!(payload.description.is_none());
        assert!(payload.status.is_none());
    }

    #[test]
    fn test_into_patch_contains_only_filled_fields() {
        let form = TaskForm {
            title: String::new(),
            description: "Now with oat milk".to_string(),
            due_date: None,
            status: Some(TaskStatus::Completed),
        };
        let patch = form.into_patch();
        assert!(patch.title.is_none());
        assert_eq!(patch.description, Some("Now with oat milk".to_string()));
        assert_eq!(patch.status, Some(TaskStatus::Completed));

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"description": "Now with oat milk", "status": "completed"})
        );
    }
}
