//! Todo API endpoints
//!
//! RESTful API for todo CRUD operations. Deleting a todo is a status change;
//! the `/permanent` route is the only one that removes a record.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use todo_core::task::{Task, TaskRepository, TaskStatus};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TodoResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status: task.status,
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/todos - List all todos
async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let tasks = state.task_store().list().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(tasks.into_iter().map(TodoResponse::from).collect()))
}

/// GET /api/todos/status/:status - List todos in one status
async fn list_todos_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<TodoResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let status: TaskStatus = status.parse().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Unknown status: {}", status),
            }),
        )
    })?;

    let tasks = state.task_store().find_by_status(status).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(tasks.into_iter().map(TodoResponse::from).collect()))
}

/// GET /api/todos/:id - Get a single todo
async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoResponse>, (StatusCode, Json<ErrorResponse>)> {
    let task = state.task_store().get(id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    match task {
        Some(t) => Ok(Json(TodoResponse::from(t))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Todo {} not found", id),
            }),
        )),
    }
}

/// POST /api/todos - Create a new todo
async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), (StatusCode, Json<ErrorResponse>)> {
    // Validate input; a missing title and a blank one are the same error
    let title = match req.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Title cannot be empty".to_string(),
                }),
            ))
        }
    };

    let mut task = Task::new(title);

    if let Some(desc) = req.description {
        task = task.with_description(desc);
    }

    if let Some(due_date) = req.due_date {
        task = task.with_due_date(due_date);
    }

    if let Some(status) = req.status {
        task = task.with_status(status);
    }

    let created = state.task_store().create(task).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(created))))
}

/// PUT /api/todos/:id - Partially update a todo
///
/// Only the supplied fields change. Blank title/description strings count as
/// "not supplied", matching what the browser forms send.
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, (StatusCode, Json<ErrorResponse>)> {
    // First get the existing todo
    let existing = state.task_store().get(id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let mut task = match existing {
        Some(t) => t,
        None => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Todo {} not found", id),
                }),
            ))
        }
    };

    // Apply updates
    if let Some(title) = req.title {
        if !title.trim().is_empty() {
            task.title = title;
        }
    }

    if let Some(desc) = req.description {
        if !desc.trim().is_empty() {
            task.description = Some(desc);
        }
    }

    if let Some(due_date) = req.due_date {
        task.due_date = Some(due_date);
    }

    if let Some(status) = req.status {
        task.status = status;
    }

    let updated = state.task_store().update(task).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(TodoResponse::from(updated)))
}

/// DELETE /api/todos/:id - Soft delete a todo (set status to deleted)
async fn soft_delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoResponse>, (StatusCode, Json<ErrorResponse>)> {
    let existing = state.task_store().get(id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let mut task = match existing {
        Some(t) => t,
        None => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Todo {} not found", id),
                }),
            ))
        }
    };

    task.status = TaskStatus::Deleted;

    let updated = state.task_store().update(task).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(TodoResponse::from(updated)))
}

/// DELETE /api/todos/:id/permanent - Remove a todo from the store entirely
async fn permanent_delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let removed = state.task_store().remove(id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    if removed {
        Ok(Json(MessageResponse {
            message: "Todo permanently deleted".to_string(),
        }))
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Todo {} not found", id),
            }),
        ))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/status/{status}", get(list_todos_by_status))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(soft_delete_todo),
        )
        .route("/api/todos/{id}/permanent", delete(permanent_delete_todo))
}
