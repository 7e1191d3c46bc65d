//! Typed HTTP binding for the todo service
//!
//! One method per API operation. No retries, no caching; a failed call is
//! surfaced to the caller with the service's own error message where one was
//! returned.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use todo_core::task::TaskStatus;

use crate::error::ClientError;
use crate::Result;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A todo as served by the API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a todo
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Partial update; absent fields are left unchanged by the service
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Error body as returned by the service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub struct TodoClient {
    client: Client,
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|e| {
                    tracing::warn!("HTTP client builder failed, request timeout lost: {}", e);
                    Client::new()
                }),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /api/todos
    pub async fn list_all(&self) -> Result<Vec<Todo>> {
        let res = self.client.get(self.url("/api/todos")).send().await?;
        decode(res).await
    }

    /// GET /api/todos/status/:status
    pub async fn list_by_status(&self, status: TaskStatus) -> Result<Vec<Todo>> {
        let res = self
            .client
            .get(self.url(&format!("/api/todos/status/{}", status)))
            .send()
            .await?;
        decode(res).await
    }

    /// Length of the per-status list; the service has no dedicated count route
    pub async fn count_by_status(&self, status: TaskStatus) -> Result<usize> {
        Ok(self.list_by_status(status).await?.len())
    }

    /// GET /api/todos/:id
    pub async fn get(&self, id: Uuid) -> Result<Todo> {
        let res = self
            .client
            .get(self.url(&format!("/api/todos/{}", id)))
            .send()
            .await?;
        decode(res).await
    }

    /// POST /api/todos
    pub async fn create(&self, todo: &NewTodo) -> Result<Todo> {
        let res = self
            .client
            .post(self.url("/api/todos"))
            .json(todo)
            .send()
            .await?;
        decode(res).await
    }

    /// PUT /api/todos/:id
    pub async fn update(&self, id: Uuid, patch: &TodoPatch) -> Result<Todo> {
        let res = self
            .client
            .put(self.url(&format!("/api/todos/{}", id)))
            .json(patch)
            .send()
            .await?;
        decode(res).await
    }

    /// Status-only update (complete / reactivate)
    pub async fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<Todo> {
        self.update(
            id,
            &TodoPatch {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// DELETE /api/todos/:id - soft delete, returns the task marked deleted
    pub async fn soft_delete(&self, id: Uuid) -> Result<Todo> {
        let res = self
            .client
            .delete(self.url(&format!("/api/todos/{}", id)))
            .send()
            .await?;
        decode(res).await
    }

    /// DELETE /api/todos/:id/permanent - irreversible
    pub async fn permanently_delete(&self, id: Uuid) -> Result<()> {
        let res = self
            .client
            .delete(self.url(&format!("/api/todos/{}/permanent", id)))
            .send()
            .await?;
        if res.status().is_success() {
            Ok(())
        } else {
            Err(api_error(res).await)
        }
    }
}

async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T> {
    if res.status().is_success() {
        Ok(res.json().await?)
    } else {
        Err(api_error(res).await)
    }
}

async fn api_error(res: reqwest::Response) -> ClientError {
    let status = res.status().as_u16();
    let message = match res.json::<ErrorBody>().await {
        Ok(body) => body
            .error
            .or(body.message)
            .unwrap_or_else(|| format!("Request failed with status {}", status)),
        Err(_) => format!("Request failed with status {}", status),
    };
    ClientError::Api { status, message }
}
