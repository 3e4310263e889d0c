use super::messages::Message;
use super::task::TaskRecord;
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders a task list snapshot. An empty list gets an empty-state
    /// message instead of a bare table.
    pub fn tasks(tasks: &[TaskRecord]) {
        if tasks.is_empty() {
            msg_print!(Message::NoTasksYet);
            return;
        }

        let mut table = Table::new();
        table.add_row(row!["#", "ID", "TASK", "DESCRIPTION", "CREATED", "STATUS"]);
        for (index, task) in tasks.iter().enumerate() {
            table.add_row(row![
                index + 1,
                task.task_id,
                task.task_name,
                task.description,
                task.created_date,
                task.status
            ]);
        }
        table.printstd();
    }
}
