use crate::api::TaskApi;
use crate::libs::messages::Message;
use crate::libs::notify::Notify;
use crate::libs::store::TaskStore;
use crate::libs::task::is_valid_title;
use std::sync::Arc;

/// Transient input state for creating a new task.
///
/// A single instance drives the creation flow. The drafts are cleared after
/// every submission attempt, successful or not; a failed creation loses the
/// input (a known gap, see DESIGN.md).
pub struct TaskForm {
    draft_name: String,
    draft_description: String,
    submitting: bool,
    notify: Arc<dyn Notify>,
}

impl TaskForm {
    pub fn new(notify: Arc<dyn Notify>) -> Self {
        Self {
            draft_name: String::new(),
            draft_description: String::new(),
            submitting: false,
            notify,
        }
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

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submits the drafts through the store.
    ///
    /// An empty trimmed title is rejected locally with an alert and no API
    /// call. Returns whether a submission was attempted; creation failures
    /// themselves are swallowed by the store.
    pub async fn submit<A: TaskApi>(&mut self, store: &TaskStore<A>) -> bool {
        if !is_valid_title(&self.draft_name) {
            self.notify.alert(Message::TaskTitleEmpty);
            return false;
        }

        self.submitting = true;
        store.create(&self.draft_name, &self.draft_description).await;

        self.draft_name.clear();
        self.draft_description.clear();
        self.submitting = false;
        true
    }
}
