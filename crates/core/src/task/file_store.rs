//! File-based task storage implementation
//!
//! Stores tasks as JSON documents in a single file on disk.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Task, TaskStatus};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory cache of tasks
    cache: RwLock<HashMap<Uuid, Task>>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache: HashMap<Uuid, Task> = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let tasks: Vec<Task> = serde_json::from_str(&content)?;
            tasks.into_iter().map(|t| (t.id, t)).collect()
        } else {
            HashMap::new()
        };

        tracing::debug!("Loaded {} tasks from {:?}", cache.len(), path);

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Persist the cache to disk
    async fn persist(&self) -> Result<()> {
        let cache = self.cache.read().await;
        let tasks: Vec<&Task> = cache.values().collect();
        let content = serde_json::to_string_pretty(&tasks)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn create(&self, task: Task) -> Result<Task> {
        {
            let mut cache = self.cache.write().await;
            if cache.contains_key(&task.id) {
                return Err(Error::InvalidInput(format!(
                    "Task with ID {} already exists",
                    task.id
                )));
            }
            cache.insert(task.id, task.clone());
        }
        self.persist().await?;
        Ok(task)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let cache = self.cache.read().await;
        Ok(cache.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<Task> = cache.values().cloned().collect();
        // Sort by created_at descending (newest first)
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<Task> = cache
            .values()
            .filter(|t| t.status == status)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn update(&self, mut task: Task) -> Result<Task> {
        task.updated_at = Utc::now();
        {
            let mut cache = self.cache.write().await;
            if !cache.contains_key(&task.id) {
                return Err(Error::TaskNotFound(task.id.to_string()));
            }
            cache.insert(task.id, task.clone());
        }
        self.persist().await?;
        Ok(task)
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let removed = {
            let mut cache = self.cache.write().await;
            cache.remove(&id).is_some()
        };
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    async fn create_test_store() -> (FileTaskStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");
        let store = FileTaskStore::new(&path).await.unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_create_task() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Buy milk").with_description("Two litres");
        let created = store.create(task.clone()).await.unwrap();

        assert_eq!(created.id, task.id);
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.status, TaskStatus::Active);
        assert_eq!(created.description, Some("Two litres".to_string()));
    }

    #[tokio::test]
    async fn test_get_task() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Water plants");
        let id = task.id;
        store.create(task).await.unwrap();

        let retrieved = store.get(id).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id, id);

        // Test non-existent task
        let non_existent = store.get(Uuid::new_v4()).await.unwrap();
        assert!(non_existent.is_none());
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let (store, _temp) = create_test_store().await;

        store.create(Task::new("Task 1")).await.unwrap();
        store.create(Task::new("Task 2")).await.unwrap();
        store.create(Task::new("Task 3")).await.unwrap();

        let tasks = store.list().await.unwrap();
        assert_eq!(tasks.len(), 3);
    }

    #[tokio::test]
    async fn test_update_task_bumps_updated_at() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Original title");
        let id = task.id;
        let created = store.create(task).await.unwrap();

        let mut edited = store.get(id).await.unwrap().unwrap();
        edited.title = "Updated title".to_string();
        edited.status = TaskStatus::Completed;

        let result = store.update(edited).await.unwrap();
        assert_eq!(result.title, "Updated title");
        assert_eq!(result.status, TaskStatus::Completed);
        assert!(result.updated_at >= created.updated_at);
        assert_eq!(result.created_at, created.created_at);

        // Verify persistence
        let retrieved = store.get(id).await.unwrap().unwrap();
        assert_eq!(retrieved.title, "Updated title");
    }

    #[tokio::test]
    async fn test_update_nonexistent_task() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Never stored");
        let result = store.update(task).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            Error::TaskNotFound(_) => {}
            e => panic!("Expected TaskNotFound error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_remove_task() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Task to purge");
        let id = task.id;
        store.create(task).await.unwrap();

        assert!(store.get(id).await.unwrap().is_some());

        let removed = store.remove(id).await.unwrap();
        assert!(removed);

        // Verify task is gone
        assert!(store.get(id).await.unwrap().is_none());

        // Remove again should return false
        let removed_again = store.remove(id).await.unwrap();
        assert!(!removed_again);
    }

    #[tokio::test]
    async fn test_find_by_status() {
        let (store, _temp) = create_test_store().await;

        store.create(Task::new("Active 1")).await.unwrap();
        store.create(Task::new("Active 2")).await.unwrap();
        store
            .create(Task::new("Done 1").with_status(TaskStatus::Completed))
            .await
            .unwrap();
        store
            .create(Task::new("Binned 1").with_status(TaskStatus::Deleted))
            .await
            .unwrap();

        let active = store.find_by_status(TaskStatus::Active).await.unwrap();
        assert_eq!(active.len(), 2);

        let completed = store.find_by_status(TaskStatus::Completed).await.unwrap();
        assert_eq!(completed.len(), 1);

        let deleted = store.find_by_status(TaskStatus::Deleted).await.unwrap();
        assert_eq!(deleted.len(), 1);
    }

    #[tokio::test]
    async fn test_soft_deleted_task_stays_in_store() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Soft target");
        let id = task.id;
        store.create(task).await.unwrap();

        let mut binned = store.get(id).await.unwrap().unwrap();
        binned.status = TaskStatus::Deleted;
        store.update(binned).await.unwrap();

        let active = store.find_by_status(TaskStatus::Active).await.unwrap();
        assert!(active.iter().all(|t| t.id != id));

        let deleted = store.find_by_status(TaskStatus::Deleted).await.unwrap();
        assert!(deleted.iter().any(|t| t.id == id));

        // Still retrievable by id
        assert!(store.get(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");

        let task_id;

        // Create store and add task
        {
            let store = FileTaskStore::new(&path).await.unwrap();
            let task = Task::new("Persistent task")
                .with_description("Should survive reload")
                .with_due_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
            task_id = task.id;
            store.create(task).await.unwrap();
        }

        // Create new store instance and verify data persisted
        {
            let store = FileTaskStore::new(&path).await.unwrap();
            let task = store.get(task_id).await.unwrap();
            assert!(task.is_some());
            let task = task.unwrap();
            assert_eq!(task.title, "Persistent task");
            assert_eq!(task.description, Some("Should survive reload".to_string()));
            assert_eq!(
                task.due_date,
                Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
            );
        }
    }

    #[tokio::test]
    async fn test_duplicate_task_error() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("One of a kind");
        store.create(task.clone()).await.unwrap();

        let result = store.create(task).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            Error::InvalidInput(msg) => {
                assert!(msg.contains("already exists"));
            }
            e => panic!("Expected InvalidInput error, got: {:?}", e),
        }
    }
}
