//! HTTP client for the Smart To-Do REST API.
//!
//! One method per endpoint, each a direct call returning the parsed response
//! body or an error. No batching, no caching, no retries.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::entities::{Category, Task, User};
use crate::errors::{ClientError, ClientResult};

/// Login/register credentials
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload
#[derive(Debug, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Profile update payload
#[derive(Debug, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

/// Successful login response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Task fields the client sends on create and update.
///
/// The edit form always submits the whole payload; a cleared deadline or
/// reminder goes out as an explicit null.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub category: Category,
    pub deadline: Option<DateTime<Utc>>,
    pub reminder: Option<DateTime<Utc>>,
}

/// Completion toggle payload
#[derive(Debug, Serialize)]
struct CompletionPayload {
    #[serde(rename = "isCompleted")]
    is_completed: bool,
}

/// Error body the server sends on failures
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for the Smart To-Do API.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach the bearer token used for authenticated endpoints.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> ClientResult<&str> {
        self.token.as_deref().ok_or(ClientError::NotLoggedIn)
    }

    /// Map a response to its decoded body, or to an API error carrying the
    /// server's message when the body has one.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Json {
            reason: e.to_string(),
        })
    }

    async fn check(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    // === User endpoints ===

    /// Register a new account. Does not log in.
    pub async fn register(&self, new_user: &NewUser) -> ClientResult<User> {
        let response = self
            .client
            .post(self.url("/users/register"))
            .json(new_user)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        let response = self
            .client
            .post(self.url("/users/login"))
            .json(credentials)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Fetch the current user's profile.
    pub async fn profile(&self) -> ClientResult<User> {
        let response = self
            .client
            .get(self.url("/users/profile"))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Update the current user's profile.
    ///
    /// The endpoint is not implemented server-side yet; callers get whatever
    /// the server answers.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        let response = self
            .client
            .put(self.url("/users/profile"))
            .bearer_auth(self.bearer()?)
            .json(update)
            .send()
            .await?;
        Self::decode(response).await
    }

    // === Task endpoints ===

    /// Fetch all tasks for the session, wholesale.
    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let response = self
            .client
            .get(self.url("/tasks"))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Fetch a single task by id.
    pub async fn get_task(&self, task_id: &str) -> ClientResult<Task> {
        let response = self
            .client
            .get(self.url(&format!("/tasks/{task_id}")))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Create a task.
    pub async fn create_task(&self, payload: &TaskPayload) -> ClientResult<Task> {
        let response = self
            .client
            .post(self.url("/tasks"))
            .bearer_auth(self.bearer()?)
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Update a task's fields.
    pub async fn update_task(&self, task_id: &str, payload: &TaskPayload) -> ClientResult<Task> {
        let response = self
            .client
            .put(self.url(&format!("/tasks/{task_id}")))
            .bearer_auth(self.bearer()?)
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Mark a task completed or pending.
    pub async fn set_completed(&self, task_id: &str, is_completed: bool) -> ClientResult<Task> {
        let response = self
            .client
            .put(self.url(&format!("/tasks/{task_id}")))
            .bearer_auth(self.bearer()?)
            .json(&CompletionPayload { is_completed })
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Delete a task.
    pub async fn delete_task(&self, task_id: &str) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/tasks/{task_id}")))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_payload_field_name() {
        let json = serde_json::to_string(&CompletionPayload { is_completed: true }).unwrap();
        assert_eq!(json, r#"{"isCompleted":true}"#);
    }

    #[test]
    fn test_task_payload_serializes_null_dates() {
        let payload = TaskPayload {
            title: "Buy milk".to_string(),
            category: Category::Personal,
            deadline: None,
            reminder: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["deadline"], serde_json::Value::Null);
        assert_eq!(json["reminder"], serde_json::Value::Null);
        assert_eq!(json["category"], "Personal");
    }

    #[test]
    fn test_unauthenticated_client_has_no_bearer() {
        let client = ApiClient::new("http://localhost:5000/api");
        assert!(client.bearer().is_err());
    }
}
