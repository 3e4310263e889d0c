pub mod add;
pub mod complete;
pub mod edit;
pub mod init;
pub mod list;

use crate::api::TaskClient;
use crate::libs::config::Config;
use crate::libs::notify;
use crate::libs::store::TaskStore;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "List tasks ordered by creation time")]
    List,
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Edit a task's title and description")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::List => list::cmd().await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Complete(args) => complete::cmd(args).await,
        }
    }
}

/// Builds the store from the configured server and performs its initial
/// refresh. Every command goes through here.
pub(crate) async fn mount_store() -> Result<TaskStore<TaskClient>> {
    let config = Config::read()?;
    let client = TaskClient::new(&config.server_or_default());
    Ok(TaskStore::mount(client, notify::console()).await)
}
