//! Authoritative in-memory task list and its synchronization rules.
//!
//! The store owns the only client-side copy of the task list. Updates are
//! pessimistic: a mutation never patches the list locally, it triggers a
//! full re-fetch so the client always renders the server's ground truth.
//! The cost is an extra round-trip per mutation; the benefit is that the
//! UI and the backend can never silently diverge.
//!
//! Failure policy, per operation:
//! - `refresh` failures are logged and the previous list is kept, so a
//!   transient network blip does not blank the screen.
//! - `create` and `complete` failures are logged only; a later refresh
//!   recovers them.
//! - `update` failures are always surfaced through the alert channel,
//!   because losing a user's edits silently is not acceptable.

use crate::api::{ApiError, TaskApi};
use crate::libs::messages::Message;
use crate::libs::notify::Notify;
use crate::libs::task::TaskRecord;
use crate::{msg_debug, msg_error};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct StoreState {
    tasks: Vec<TaskRecord>,
    loading: bool,
    /// Sequence number of the refresh whose response is currently applied.
    applied_seq: u64,
}

/// State container for the canonical task list.
///
/// Only [`TaskStore::refresh`] writes to the list; everything else reads
/// snapshots. The mutex is never held across an await.
pub struct TaskStore<A> {
    api: A,
    notify: Arc<dyn Notify>,
    state: Mutex<StoreState>,
    refresh_seq: AtomicU64,
}

impl<A: TaskApi> TaskStore<A> {
    pub fn new(api: A, notify: Arc<dyn Notify>) -> Self {
        Self {
            api,
            notify,
            state: Mutex::new(StoreState {
                tasks: Vec::new(),
                loading: false,
                applied_seq: 0,
            }),
            refresh_seq: AtomicU64::new(0),
        }
    }

    /// Creates the store and performs the one automatic initial refresh.
    /// There is no polling afterwards; refreshes follow mutations.
    pub async fn mount(api: A, notify: Arc<dyn Notify>) -> Self {
        let store = Self::new(api, notify);
        store.refresh().await;
        store
    }

    /// Re-fetches the full task list and replaces local state wholesale.
    ///
    /// The fetched list is sorted by creation date ascending with a stable
    /// sort, so records with equal timestamps keep the server's order. On
    /// failure the previous list is kept.
    ///
    /// Concurrent refreshes are possible when a second mutation fires while
    /// an earlier refresh is still in flight. Each attempt is tagged with a
    /// monotonic sequence number and a response is applied only if nothing
    /// newer has been applied yet, so a late response from an older request
    /// cannot overwrite fresher data.
    pub async fn refresh(&self) {
        let seq = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().loading = true;

        let result = self.api.list_tasks().await;

        let mut state = self.state.lock();
        match result {
            Ok(mut tasks) => {
                if seq > state.applied_seq {
                    tasks.sort_by(TaskRecord::by_created_date);
                    state.tasks = tasks;
                    state.applied_seq = seq;
                } else {
                    msg_debug!(format!("discarding stale task list response (seq {})", seq));
                }
            }
            Err(err) => {
                msg_error!(Message::TaskListFetchFailed(err.to_string()));
            }
        }
        // Only the newest attempt clears the flag; an older slow response
        // must not end the loading state of a refresh still in flight.
        if seq == self.refresh_seq.load(Ordering::SeqCst) {
            state.loading = false;
        }
    }

    /// Creates a task and refreshes on success. Failures are logged only;
    /// the caller gets no programmatic error (see DESIGN.md).
    pub async fn create(&self, name: &str, description: &str) {
        match self.api.create_task(name, description).await {
            Ok(()) => self.refresh().await,
            Err(err) => msg_error!(Message::TaskCreateFailed(err.to_string())),
        }
    }

    /// Updates a task's title and description.
    ///
    /// Returns `true` after the follow-up refresh on success. On failure the
    /// rejection or transport error is raised as a user-visible alert and
    /// `false` is returned without refreshing.
    pub async fn update(&self, task_id: i64, name: &str, description: &str) -> bool {
        match self.api.update_task(task_id, name, description).await {
            Ok(_) => {
                self.refresh().await;
                true
            }
            Err(ApiError::UpdateRejected { status, body }) => {
                self.notify.alert(Message::TaskUpdateRejected(status.as_u16(), body));
                false
            }
            Err(err) => {
                self.notify.alert(Message::TaskUpdateFailed(err.to_string()));
                false
            }
        }
    }

    /// Marks a task completed and refreshes on success. Whether completed
    /// tasks stay visible is the server's call; the client renders whatever
    /// the next fetch returns.
    pub async fn complete(&self, task_id: i64) {
        match self.api.complete_task(task_id).await {
            Ok(()) => self.refresh().await,
            Err(err) => msg_error!(Message::TaskCompleteFailed(err.to_string())),
        }
    }

    /// Snapshot of the current task list.
    pub fn tasks(&self) -> Vec<TaskRecord> {
        self.state.lock().tasks.clone()
    }

    /// Looks up a single task in the current snapshot.
    pub fn task(&self, task_id: i64) -> Option<TaskRecord> {
        self.state.lock().tasks.iter().find(|t| t.task_id == task_id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }
}
