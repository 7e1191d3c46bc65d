//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Task, TaskStatus};
use crate::Result;

/// Repository interface for task CRUD operations
///
/// Soft deletion is not a storage concern: marking a task `deleted` goes
/// through `update`, while `remove` drops the record for good.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    async fn create(&self, task: Task) -> Result<Task>;

    /// Get a task by ID
    async fn get(&self, id: Uuid) -> Result<Option<Task>>;

    /// Get all tasks
    async fn list(&self) -> Result<Vec<Task>>;

    /// Find tasks by status
    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>>;

    /// Update an existing task, bumping its `updated_at`
    async fn update(&self, task: Task) -> Result<Task>;

    /// Permanently remove a task by ID; returns false if it was absent
    async fn remove(&self, id: Uuid) -> Result<bool>;
}
