mod common;

#[cfg(test)]
mod tests {
    use super::common::{record, MockApi, RecordingNotify};
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::time::Duration;
    use taskpad::libs::store::TaskStore;
    use taskpad::libs::task::STATUS_COMPLETED;

    fn mock_notify() -> Arc<RecordingNotify> {
        Arc::new(RecordingNotify::default())
    }

    #[tokio::test]
    async fn test_refresh_sorts_by_created_date_ascending() {
        // The backend answers newest-first; the client must not care.
        let orderings = [
            vec![2, 1, 3],
            vec![3, 2, 1],
            vec![1, 2, 3],
        ];
        for ordering in orderings {
            let tasks = ordering
                .iter()
                .map(|&id| record(id, &format!("Task {}", id), "", &format!("2024-01-{:02}T10:00:00", id)))
                .collect();
            let api = MockApi::with_tasks(tasks);
            let store = TaskStore::mount(api, mock_notify()).await;

            let ids: Vec<i64> = store.tasks().iter().map(|t| t.task_id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }

    #[tokio::test]
    async fn test_refresh_reorders_server_response() {
        // Server returns 2024-01-02 before 2024-01-01; the client renders
        // them the other way around.
        let api = MockApi::with_tasks(vec![
            record(2, "Second", "", "2024-01-02T08:00:00"),
            record(1, "First", "", "2024-01-01T08:00:00"),
        ]);
        let store = TaskStore::mount(api, mock_notify()).await;

        let dates: Vec<String> = store.tasks().iter().map(|t| t.created_date.clone()).collect();
        assert_eq!(dates, vec!["2024-01-01T08:00:00", "2024-01-02T08:00:00"]);
    }

    #[tokio::test]
    async fn test_refresh_keeps_equal_timestamps_in_server_order() {
        let api = MockApi::with_tasks(vec![
            record(7, "A", "", "2024-01-05T10:00:00"),
            record(3, "B", "", "2024-01-05T10:00:00"),
        ]);
        let store = TaskStore::mount(api, mock_notify()).await;

        let ids: Vec<i64> = store.tasks().iter().map(|t| t.task_id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_list() {
        let api = MockApi::with_tasks(vec![record(1, "Keep me", "", "2024-01-01T08:00:00")]);
        let notify = mock_notify();
        let store = TaskStore::mount(api.clone(), notify.clone()).await;
        assert_eq!(store.tasks().len(), 1);

        api.state.lock().fail_list = true;
        store.refresh().await;

        // Previous list intact, loading concluded, nothing shown to the user.
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].task_name, "Keep me");
        assert!(!store.is_loading());
        assert!(notify.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_refresh_contains_record() {
        let api = MockApi::with_tasks(vec![
            record(1, "Earlier", "", "2024-01-01T08:00:00"),
            record(2, "Later", "", "2024-03-01T08:00:00"),
        ]);
        let store = TaskStore::mount(api, mock_notify()).await;

        store.create("Buy milk", "").await;

        let tasks = store.tasks();
        let position = tasks.iter().position(|t| t.task_name == "Buy milk").unwrap();
        assert_eq!(tasks[position].description, "");
        // The mock stamps creations in 2024-02, between the seeded records.
        assert_eq!(position, 1);
    }

    #[tokio::test]
    async fn test_create_failure_is_swallowed() {
        let api = MockApi::with_tasks(vec![record(1, "Existing", "", "2024-01-01T08:00:00")]);
        api.state.lock().fail_create = true;
        let notify = mock_notify();
        let store = TaskStore::mount(api.clone(), notify.clone()).await;
        let lists_before = api.list_calls();

        store.create("Doomed", "").await;

        // Logged only: no alert, no refresh, list unchanged.
        assert!(notify.alerts().is_empty());
        assert_eq!(api.list_calls(), lists_before);
        assert_eq!(store.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_update_success_refreshes_and_returns_true() {
        let api = MockApi::with_tasks(vec![record(1, "Old title", "old", "2024-01-01T08:00:00")]);
        let store = TaskStore::mount(api.clone(), mock_notify()).await;

        let saved = store.update(1, "New title", "new").await;

        assert!(saved);
        let task = store.task(1).unwrap();
        assert_eq!(task.task_name, "New title");
        assert_eq!(task.description, "new");
        // Mount plus the post-update refresh.
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_update_rejection_alerts_and_skips_refresh() {
        let api = MockApi::with_tasks(vec![record(1, "Old title", "old", "2024-01-01T08:00:00")]);
        api.state.lock().reject_update = Some((409, "version conflict".to_string()));
        let notify = mock_notify();
        let store = TaskStore::mount(api.clone(), notify.clone()).await;
        let lists_before = api.list_calls();

        let saved = store.update(1, "New title", "new").await;

        assert!(!saved);
        assert_eq!(api.list_calls(), lists_before);
        let alerts = notify.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("409"));
        assert!(alerts[0].contains("version conflict"));
        // Local state untouched; the server never confirmed anything.
        assert_eq!(store.task(1).unwrap().task_name, "Old title");
    }

    #[tokio::test]
    async fn test_complete_refreshes_with_server_truth() {
        let api = MockApi::with_tasks(vec![record(1, "Finish me", "", "2024-01-01T08:00:00")]);
        let store = TaskStore::mount(api, mock_notify()).await;

        store.complete(1).await;

        // The client does not flip the flag itself; the refreshed record
        // carries whatever the server decided.
        let task = store.task(1).unwrap();
        assert_eq!(task.status, STATUS_COMPLETED);
        assert!(task.is_completed());
        assert!(task.completed_date.is_some());
    }

    #[tokio::test]
    async fn test_complete_failure_is_swallowed() {
        let api = MockApi::with_tasks(vec![record(1, "Existing", "", "2024-01-01T08:00:00")]);
        let notify = mock_notify();
        let store = TaskStore::mount(api.clone(), notify.clone()).await;
        let lists_before = api.list_calls();

        store.complete(99).await;

        assert!(notify.alerts().is_empty());
        assert_eq!(api.list_calls(), lists_before);
    }

    #[tokio::test]
    async fn test_stale_refresh_response_is_discarded() {
        let api = MockApi::default();
        let store = TaskStore::mount(api.clone(), mock_notify()).await;

        // First refresh is slow and answers with the old list; the second
        // is instant and answers with the new one. Without sequencing the
        // old response would win by finishing last.
        api.state.lock().list_responses = VecDeque::from(vec![
            (
                Duration::from_millis(50),
                vec![record(1, "Stale", "", "2024-01-01T08:00:00")],
            ),
            (
                Duration::from_millis(0),
                vec![record(2, "Fresh", "", "2024-01-02T08:00:00")],
            ),
        ]);

        tokio::join!(store.refresh(), store.refresh());

        let tasks = store.tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_name, "Fresh");
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_mount_performs_initial_refresh() {
        let api = MockApi::with_tasks(vec![record(1, "Preloaded", "", "2024-01-01T08:00:00")]);
        let store = TaskStore::mount(api.clone(), mock_notify()).await;

        assert_eq!(api.list_calls(), 1);
        assert_eq!(store.tasks().len(), 1);
        assert!(!store.is_loading());
    }
}
