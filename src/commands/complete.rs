use super::mount_store;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// ID of the task to mark as completed
    #[arg(required = true)]
    task_id: i64,
}

pub async fn cmd(args: CompleteArgs) -> Result<()> {
    let store = mount_store().await?;
    let Some(record) = store.task(args.task_id) else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.task_id));
    };

    // Completion needs explicit confirmation; it cannot be undone here.
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmCompleteTask(record.task_name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_warning!(Message::OperationCancelled);
        return Ok(());
    }

    store.complete(args.task_id).await;
    View::tasks(&store.tasks());
    Ok(())
}
