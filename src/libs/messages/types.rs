/// All user-facing message variants.
///
/// Keeping the text behind one enum gives a single place to review wording
/// and lets tests assert on alerts without string literals scattered
/// around the codebase. Rendering lives in the `display` module.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskNotFoundWithId(i64),
    TaskTitleEmpty,
    NoTasksYet,
    EditingTask(String), // task name

    // === SYNC FAILURES ===
    TaskListFetchFailed(String),     // error detail
    TaskCreateFailed(String),        // error detail
    TaskUpdateRejected(u16, String), // status code, body text
    TaskUpdateFailed(String),        // error detail
    TaskCompleteFailed(String),      // error detail

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskDescription,
    PromptServerApiUrl,
    ConfirmCompleteTask(String), // task name

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
