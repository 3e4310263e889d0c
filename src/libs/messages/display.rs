//! Display implementation for taskpad application messages.
//!
//! Converts structured [`Message`] values into the human-readable text the
//! terminal shows. All message text lives here, in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => write!(f, "Task created successfully"),
            Message::TaskUpdated => write!(f, "Task updated successfully"),
            Message::TaskNotFoundWithId(id) => write!(f, "Task with ID {} not found", id),
            Message::TaskTitleEmpty => write!(f, "Task title cannot be empty"),
            Message::NoTasksYet => write!(f, "No tasks yet. Create one to get started!"),
            Message::EditingTask(name) => write!(f, "Editing task: {}", name),

            // === SYNC FAILURES ===
            Message::TaskListFetchFailed(err) => write!(f, "Failed to fetch tasks: {}", err),
            Message::TaskCreateFailed(err) => write!(f, "Failed to create task: {}", err),
            Message::TaskUpdateRejected(status, body) => {
                write!(f, "Failed to update task: {} - {}", status, body)
            }
            Message::TaskUpdateFailed(err) => write!(f, "Failed to update task: {}", err),
            Message::TaskCompleteFailed(err) => write!(f, "Failed to complete task: {}", err),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => write!(f, "Configuration saved successfully"),

            // === PROMPTS ===
            Message::PromptTaskName => write!(f, "Enter task title"),
            Message::PromptTaskDescription => write!(f, "Enter task description"),
            Message::PromptServerApiUrl => write!(f, "Enter the task server base URL"),
            Message::ConfirmCompleteTask(name) => write!(f, "Mark \"{}\" as completed?", name),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => write!(f, "Operation cancelled"),
        }
    }
}
