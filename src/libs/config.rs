//! Configuration management for the taskpad application.
//!
//! A single JSON file in the platform data directory holds the settings.
//! The only configurable module today is the task server connection; the
//! optional-section pattern leaves room for more without breaking existing
//! files. `read()` falls back to defaults when no file exists, so the
//! client runs against a local server with zero setup.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Task server connection parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task server, e.g. `http://localhost:8080`. The
    /// `/api/tasks` paths are appended to it.
    pub api_base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Interactive setup, pre-filled with the current value.
    pub fn init(current: &Option<Self>) -> Result<Self> {
        let current = current.clone().unwrap_or_default();
        Ok(Self {
            api_base_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(current.api_base_url)
                .interact_text()?,
        })
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Loads the configuration file, or defaults when none exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard and persists the result.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let config = Config {
            server: Some(ServerConfig::init(&current.server)?),
        };
        config.save()?;
        msg_success!(Message::ConfigSaved);
        Ok(config)
    }

    /// The server section, or defaults when it was never configured.
    pub fn server_or_default(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
}
