//! Per-status task list views

use std::cmp::Ordering;

use async_trait::async_trait;

use todo_core::task::TaskStatus;

use crate::client::{Todo, TodoClient};
use crate::Result;

/// Anything that can list tasks in one status
#[async_trait]
pub trait ListSource: Send + Sync {
    async fn list_by_status(&self, status: TaskStatus) -> Result<Vec<Todo>>;
}

#[async_trait]
impl ListSource for TodoClient {
    async fn list_by_status(&self, status: TaskStatus) -> Result<Vec<Todo>> {
        TodoClient::list_by_status(self, status).await
    }
}

/// The task list for one status
///
/// A failed refresh keeps the previously fetched tasks and records the error,
/// so the view never blanks out on a transient failure.
pub struct TaskListView {
    status: TaskStatus,
    tasks: Vec<Todo>,
    error: Option<String>,
}

impl TaskListView {
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
            error: None,
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn tasks(&self) -> &[Todo] {
        &self.tasks
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the list; called on mount and after every reported mutation
    pub async fn refresh<S: ListSource>(&mut self, source: &S) {
        match source.list_by_status(self.status).await {
            Ok(mut tasks) => {
                if self.status == TaskStatus::Active {
                    sort_by_due_date(&mut tasks);
                }
                self.tasks = tasks;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Sort ascending by due date; tasks without one go last, keeping their
/// relative order among themselves
pub fn sort_by_due_date(tasks: &mut [Todo]) {
    tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
