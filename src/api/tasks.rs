use super::{ApiError, TaskApi};
use crate::libs::config::ServerConfig;
use crate::libs::task::TaskRecord;
use crate::msg_debug;
use reqwest::Client;
use serde::Serialize;

const TASKS_PATH: &str = "api/tasks";

/// JSON body for create and update calls.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TaskPayload<'a> {
    task_name: &'a str,
    description: &'a str,
}

/// reqwest-backed implementation of [`TaskApi`].
///
/// No authentication and no client-side timeouts; the transport defaults
/// apply. The base URL comes from the server configuration.
pub struct TaskClient {
    client: Client,
    base_url: String,
}

impl TaskClient {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/{}", self.base_url, TASKS_PATH)
    }

    fn task_url(&self, task_id: i64) -> String {
        format!("{}/{}/{}", self.base_url, TASKS_PATH, task_id)
    }
}

impl TaskApi for TaskClient {
    async fn list_tasks(&self) -> Result<Vec<TaskRecord>, ApiError> {
        let res = self.client.get(self.tasks_url()).send().await?;
        let tasks = res.json::<Vec<TaskRecord>>().await?;
        Ok(tasks)
    }

    async fn create_task(&self, name: &str, description: &str) -> Result<(), ApiError> {
        let payload = TaskPayload {
            task_name: name,
            description,
        };
        self.client
            .post(self.tasks_url())
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update_task(&self, task_id: i64, name: &str, description: &str) -> Result<TaskRecord, ApiError> {
        let payload = TaskPayload {
            task_name: name,
            description,
        };
        // The update call has the richest failure surface, so it gets
        // request/response diagnostics.
        msg_debug!(format!("updating task {}: {:?}", task_id, payload));

        let res = self.client.put(self.task_url(task_id)).json(&payload).send().await?;
        let status = res.status();
        msg_debug!(format!("update response status: {}", status));

        if status.is_success() {
            let updated = res.json::<TaskRecord>().await?;
            msg_debug!(format!("task {} updated: {:?}", task_id, updated));
            Ok(updated)
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::UpdateRejected { status, body })
        }
    }

    async fn complete_task(&self, task_id: i64) -> Result<(), ApiError> {
        self.client
            .put(format!("{}/complete", self.task_url(task_id)))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
