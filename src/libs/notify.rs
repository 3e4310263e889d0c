use crate::libs::messages::Message;
use crate::msg_error;
use std::sync::Arc;

/// Channel for user-visible alerts.
///
/// Alerts are distinct from the diagnostic log: a logged failure is
/// invisible unless someone goes looking, an alert is put in front of the
/// user. Tests substitute a recording implementation.
pub trait Notify: Send + Sync {
    fn alert(&self, message: Message);
}

/// Default notifier for the terminal: alerts go to stderr.
pub struct ConsoleNotify;

impl Notify for ConsoleNotify {
    fn alert(&self, message: Message) {
        msg_error!(message);
    }
}

pub fn console() -> Arc<dyn Notify> {
    Arc::new(ConsoleNotify)
}
