//! HTTP client for the remote task server.
//!
//! Wraps the four REST operations the task server exposes into typed calls
//! with a uniform failure surface. The [`TaskApi`] trait is the seam the
//! rest of the application talks to, so the state layer can be exercised
//! against a mock in tests while [`tasks::TaskClient`] does the real
//! network work with reqwest.

use crate::libs::task::TaskRecord;
use reqwest::StatusCode;
use thiserror::Error;

pub mod tasks;

pub use tasks::TaskClient;

/// Failure taxonomy for task server calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, timeout, or a body that
    /// could not be decoded as JSON.
    #[error("network error: {0}")]
    Network(String),
    /// The server explicitly rejected an update. Carries the status code and
    /// raw body text so the rejection can be shown to the user verbatim.
    #[error("update rejected by server ({status}): {body}")]
    UpdateRejected { status: StatusCode, body: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// The four operations of the task server contract, one HTTP call each.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    /// Fetches the full task list. The body is parsed regardless of the
    /// HTTP status; a non-JSON body surfaces as [`ApiError::Network`].
    async fn list_tasks(&self) -> Result<Vec<TaskRecord>, ApiError>;

    /// Creates a task. The creation response body is ignored; callers
    /// re-fetch the list to pick up the new record.
    async fn create_task(&self, name: &str, description: &str) -> Result<(), ApiError>;

    /// Updates a task's title and description, returning the server's
    /// updated record. A non-OK status becomes [`ApiError::UpdateRejected`].
    async fn update_task(&self, task_id: i64, name: &str, description: &str) -> Result<TaskRecord, ApiError>;

    /// Marks a task completed. Callers re-fetch the list on success.
    async fn complete_task(&self, task_id: i64) -> Result<(), ApiError>;
}
