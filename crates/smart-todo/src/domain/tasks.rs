//! Tasks domain facade.

use futures::future::join_all;
use tracing::debug;

use crate::api::{ApiClient, TaskPayload};
use crate::entities::Task;
use crate::errors::ClientResult;

/// High-level task operations over the API client.
pub struct TasksDomain {
    api: ApiClient,
}

impl TasksDomain {
    /// Create a new tasks domain.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the full task collection.
    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        self.api.list_tasks().await
    }

    /// Fetch a single task.
    pub async fn get_task(&self, task_id: &str) -> ClientResult<Task> {
        self.api.get_task(task_id).await
    }

    /// Create a task.
    pub async fn create_task(&self, payload: &TaskPayload) -> ClientResult<Task> {
        self.api.create_task(payload).await
    }

    /// Update a task with a full payload (edit-form semantics).
    pub async fn update_task(&self, task_id: &str, payload: &TaskPayload) -> ClientResult<Task> {
        self.api.update_task(task_id, payload).await
    }

    /// Toggle completion.
    pub async fn set_completed(&self, task_id: &str, is_completed: bool) -> ClientResult<Task> {
        self.api.set_completed(task_id, is_completed).await
    }

    /// Delete a task.
    pub async fn delete_task(&self, task_id: &str) -> ClientResult<()> {
        self.api.delete_task(task_id).await
    }

    /// Mark every id completed, one concurrent request per id, then refetch
    /// the full list. Any failure skips the refetch.
    pub async fn bulk_complete(&self, task_ids: &[String]) -> ClientResult<Vec<Task>> {
        let requests = task_ids.iter().map(|id| self.api.set_completed(id, true));

        for result in join_all(requests).await {
            result?;
        }

        debug!(count = task_ids.len(), "bulk complete finished, refetching");
        self.api.list_tasks().await
    }

    /// Delete every id, one concurrent request per id, then refetch the full
    /// list. Any failure skips the refetch.
    pub async fn bulk_delete(&self, task_ids: &[String]) -> ClientResult<Vec<Task>> {
        let requests = task_ids.iter().map(|id| self.api.delete_task(id));

        for result in join_all(requests).await {
            result?;
        }

        debug!(count = task_ids.len(), "bulk delete finished, refetching");
        self.api.list_tasks().await
    }
}
