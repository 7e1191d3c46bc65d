//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use todo_core::task::FileTaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pub task_store: FileTaskStore,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Create a new AppState with the given data directory
    pub async fn new(data_dir: PathBuf) -> todo_core::Result<Self> {
        let todos_path = data_dir.join("todos.json");
        let task_store = FileTaskStore::new(todos_path).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                task_store,
                data_dir,
            }),
        })
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &FileTaskStore {
        &self.inner.task_store
    }

    /// Get the data directory the store writes to
    pub fn data_dir(&self) -> &PathBuf {
        &self.inner.data_dir
    }
}
