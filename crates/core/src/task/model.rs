//! Task model definitions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

/// Lifecycle status of a task
///
/// `Deleted` is a status, not row removal. A task only leaves the store
/// through the separate permanent-delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Active,
    Completed,
    Deleted,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl TaskStatus {
    /// Every recognized status, in display order
    pub const ALL: [TaskStatus; 3] = [Self::Active, Self::Completed, Self::Deleted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "deleted" => Ok(Self::Deleted),
            other => Err(Error::InvalidInput(format!("Unknown status: {}", other))),
        }
    }
}

/// A single todo item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with the given title
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            due_date: None,
            status: TaskStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the initial status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new("Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, TaskStatus::Active);
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_task_with_description() {
        let task = Task::new("Buy milk").with_description("Semi-skimmed");
        assert_eq!(task.description, Some("Semi-skimmed".to_string()));
    }

    #[test]
    fn test_task_with_due_date() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let task = Task::new("Buy milk").with_due_date(due);
        assert_eq!(task.due_date, Some(due));
    }

    #[test]
    fn test_task_with_status() {
        let task = Task::new("Old chore").with_status(TaskStatus::Completed);
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn test_status_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        let result = "archived".parse::<TaskStatus>();
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&TaskStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}
