use super::mount_store;
use crate::libs::editor::TaskEditor;
use crate::libs::messages::Message;
use crate::libs::notify;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    #[arg(required = true)]
    task_id: i64,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let store = mount_store().await?;
    let Some(record) = store.task(args.task_id) else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.task_id));
    };

    let mut editor = TaskEditor::new(&record, notify::console());
    editor.begin_edit();
    msg_print!(Message::EditingTask(record.task_name.clone()));

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .default(editor.draft_name().to_string())
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(editor.draft_description().to_string())
        .interact_text()?;

    editor.set_draft_name(name);
    editor.set_draft_description(description);

    if editor.save(&store).await {
        msg_success!(Message::TaskUpdated);
        View::tasks(&store.tasks());
    }
    Ok(())
}
