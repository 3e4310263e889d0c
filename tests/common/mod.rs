#![allow(dead_code)]

use parking_lot::Mutex;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use taskpad::api::{ApiError, TaskApi};
use taskpad::libs::messages::Message;
use taskpad::libs::notify::Notify;
use taskpad::libs::task::{TaskRecord, STATUS_COMPLETED, STATUS_PROGRESS};

pub fn record(id: i64, name: &str, description: &str, created: &str) -> TaskRecord {
    TaskRecord {
        task_id: id,
        task_name: name.to_string(),
        description: description.to_string(),
        status: STATUS_PROGRESS.to_string(),
        created_date: created.to_string(),
        completed_date: None,
    }
}

#[derive(Default)]
pub struct MockState {
    pub tasks: Vec<TaskRecord>,
    pub next_id: i64,
    pub fail_list: bool,
    pub fail_create: bool,
    pub reject_update: Option<(u16, String)>,
    /// Scripted list responses, consumed in order; each entry is a delay
    /// followed by the list to return. Used to simulate out-of-order
    /// completion of concurrent refreshes.
    pub list_responses: VecDeque<(Duration, Vec<TaskRecord>)>,
    pub list_calls: usize,
    pub create_calls: usize,
    pub update_calls: usize,
    pub complete_calls: usize,
}

/// In-memory stand-in for the task server, behaving like the real backend:
/// create assigns an id and a creation date, update rewrites title and
/// description, complete flips the status.
#[derive(Clone, Default)]
pub struct MockApi {
    pub state: Arc<Mutex<MockState>>,
}

impl MockApi {
    pub fn with_tasks(tasks: Vec<TaskRecord>) -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock();
            state.next_id = tasks.iter().map(|t| t.task_id).max().unwrap_or(0) + 1;
            state.tasks = tasks;
        }
        api
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().list_calls
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().create_calls
    }

    pub fn update_calls(&self) -> usize {
        self.state.lock().update_calls
    }

    pub fn complete_calls(&self) -> usize {
        self.state.lock().complete_calls
    }
}

impl TaskApi for MockApi {
    async fn list_tasks(&self) -> Result<Vec<TaskRecord>, ApiError> {
        let scripted = {
            let mut state = self.state.lock();
            state.list_calls += 1;
            if let Some(response) = state.list_responses.pop_front() {
                Some(response)
            } else if state.fail_list {
                return Err(ApiError::Network("connection refused".to_string()));
            } else {
                return Ok(state.tasks.clone());
            }
        };
        let (delay, tasks) = scripted.unwrap();
        tokio::time::sleep(delay).await;
        Ok(tasks)
    }

    async fn create_task(&self, name: &str, description: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.create_calls += 1;
        if state.fail_create {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        let id = state.next_id;
        state.next_id += 1;
        let created = format!("2024-02-01T09:{:02}:00", id.min(59));
        let task = record(id, name, description, &created);
        state.tasks.push(task);
        Ok(())
    }

    async fn update_task(&self, task_id: i64, name: &str, description: &str) -> Result<TaskRecord, ApiError> {
        let mut state = self.state.lock();
        state.update_calls += 1;
        if let Some((status, body)) = state.reject_update.clone() {
            return Err(ApiError::UpdateRejected {
                status: StatusCode::from_u16(status).unwrap(),
                body,
            });
        }
        let Some(task) = state.tasks.iter_mut().find(|t| t.task_id == task_id) else {
            return Err(ApiError::UpdateRejected {
                status: StatusCode::BAD_REQUEST,
                body: "task not found".to_string(),
            });
        };
        task.task_name = name.to_string();
        task.description = description.to_string();
        Ok(task.clone())
    }

    async fn complete_task(&self, task_id: i64) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.complete_calls += 1;
        let Some(task) = state.tasks.iter_mut().find(|t| t.task_id == task_id) else {
            return Err(ApiError::Network("task not found".to_string()));
        };
        task.status = STATUS_COMPLETED.to_string();
        task.completed_date = Some("2024-02-02T12:00:00".to_string());
        Ok(())
    }
}

/// Captures alerts instead of printing them, so tests can assert on what
/// the user would have been shown.
#[derive(Default)]
pub struct RecordingNotify {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotify {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }
}

impl Notify for RecordingNotify {
    fn alert(&self, message: Message) {
        self.alerts.lock().push(message.to_string());
    }
}
