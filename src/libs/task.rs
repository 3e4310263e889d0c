use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

/// Server-side status value for a task that is still in progress.
pub const STATUS_PROGRESS: &str = "Progress";
/// Server-side status value for a completed task.
pub const STATUS_COMPLETED: &str = "Completed";

/// A task as the server defines it.
///
/// Every field is server-owned. The client caches records as-is and never
/// patches them locally; after any mutation it re-fetches the full list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub task_id: i64,
    pub task_name: String,
    /// Optional on the wire, normalized to an empty string in client state.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
    /// Assigned by the server at creation, immutable, used only for ordering.
    pub created_date: String,
    #[serde(default)]
    pub completed_date: Option<String>,
}

impl TaskRecord {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }

    /// Parsed creation timestamp, if the server sent a recognizable format.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created_date, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(&self.created_date, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
    }

    /// Ordering by creation time ascending. Unparseable timestamps fall back
    /// to lexicographic comparison, which matches ISO-8601 ordering anyway.
    /// Equal keys compare equal so a stable sort keeps the server order.
    pub fn by_created_date(a: &TaskRecord, b: &TaskRecord) -> Ordering {
        match (a.created_at(), b.created_at()) {
            (Some(left), Some(right)) => left.cmp(&right),
            _ => a.created_date.cmp(&b.created_date),
        }
    }
}

/// A draft title is valid once its trimmed form is non-empty.
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}

fn default_status() -> String {
    STATUS_PROGRESS.to_string()
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
