use crate::libs::config::Config;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?;
    Ok(())
}
