use super::mount_store;
use crate::libs::form::TaskForm;
use crate::libs::messages::Message;
use crate::libs::notify;
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompted for when omitted
    name: Option<String>,
    /// Task description
    #[arg(short, long)]
    description: Option<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let store = mount_store().await?;
    let mut form = TaskForm::new(notify::console());

    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let description = match args.description {
        Some(description) => description,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    form.set_draft_name(name);
    form.set_draft_description(description);

    if form.submit(&store).await {
        msg_success!(Message::TaskCreated);
        View::tasks(&store.tasks());
    }
    Ok(())
}
