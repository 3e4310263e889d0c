//! Per-task edit lifecycle.
//!
//! Each rendered task gets its own editor; there is no shared state
//! between them. The machine is small:
//!
//! ```text
//! Viewing --edit--> Editing --save--> Saving --ok--> Viewing
//!    ^                 |                 |
//!    '----cancel-------'                 '--fail--> Editing
//! ```
//!
//! Drafts follow the underlying record while the editor is not editing, so
//! a cancel always reverts to the latest server values rather than the
//! snapshot taken when editing began.

use crate::api::TaskApi;
use crate::libs::messages::Message;
use crate::libs::notify::Notify;
use crate::libs::store::TaskStore;
use crate::libs::task::{is_valid_title, TaskRecord};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Viewing,
    Editing,
    Saving,
}

/// Transient edit state for a single task. Exists only while the task is
/// on screen; nothing here is persisted.
pub struct TaskEditor {
    task_id: i64,
    phase: EditorPhase,
    draft_name: String,
    draft_description: String,
    notify: Arc<dyn Notify>,
}

impl TaskEditor {
    /// Seeds the drafts from the current record and starts in `Viewing`.
    pub fn new(record: &TaskRecord, notify: Arc<dyn Notify>) -> Self {
        Self {
            task_id: record.task_id,
            phase: EditorPhase::Viewing,
            draft_name: record.task_name.clone(),
            draft_description: record.description.clone(),
            notify,
        }
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn is_editing(&self) -> bool {
        self.phase == EditorPhase::Editing
    }

    pub fn is_saving(&self) -> bool {
        self.phase == EditorPhase::Saving
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft_name = name.into();
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft_description = description.into();
    }

    /// Follows external changes to the record while not actively editing.
    /// A refresh may replace the record under this editor at any time.
    pub fn sync_record(&mut self, record: &TaskRecord) {
        if self.phase == EditorPhase::Viewing {
            self.draft_name = record.task_name.clone();
            self.draft_description = record.description.clone();
        }
    }

    pub fn begin_edit(&mut self) {
        if self.phase == EditorPhase::Viewing {
            self.phase = EditorPhase::Editing;
        }
    }

    /// Discards the drafts and reverts to the record's current values --
    /// the latest ones, not those captured when editing began.
    pub fn cancel(&mut self, record: &TaskRecord) {
        if self.phase == EditorPhase::Editing {
            self.draft_name = record.task_name.clone();
            self.draft_description = record.description.clone();
            self.phase = EditorPhase::Viewing;
        }
    }

    /// Saves the drafts through the store.
    ///
    /// An empty trimmed title is rejected locally: an alert is raised, no
    /// API call is made and the editor stays in `Editing`. On a rejected
    /// save the drafts are kept as the user left them so they can retry
    /// or cancel.
    pub async fn save<A: TaskApi>(&mut self, store: &TaskStore<A>) -> bool {
        if self.phase != EditorPhase::Editing {
            return false;
        }
        if !is_valid_title(&self.draft_name) {
            self.notify.alert(Message::TaskTitleEmpty);
            return false;
        }

        self.phase = EditorPhase::Saving;
        let saved = store.update(self.task_id, &self.draft_name, &self.draft_description).await;
        self.phase = if saved { EditorPhase::Viewing } else { EditorPhase::Editing };
        saved
    }

    /// Completion is orthogonal to editing and only offered while viewing.
    pub fn can_complete(&self) -> bool {
        self.phase == EditorPhase::Viewing
    }
}
