use super::mount_store;
use crate::libs::view::View;
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let store = mount_store().await?;
    View::tasks(&store.tasks());
    Ok(())
}
