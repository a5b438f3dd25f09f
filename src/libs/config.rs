//! Configuration management for the occurrence application.
//!
//! The configuration is a small JSON file in the platform data directory
//! holding operator preferences that would otherwise be typed on every
//! report.
//!
//! ## Settings
//!
//! - **Garage name**: the depot named in the garage report template
//! - **CCO duty**: optional default for the "Plantão CCO" field
//! - **Clipboard**: optional override of the clipboard program
//!
//! A missing file is not an error: [`Config::read`] falls back to
//! [`Config::default`].
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use occurrence::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Garage: {}", config.garage_name);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::report::DEFAULT_GARAGE_NAME;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// External program receiving the report text on stdin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClipboardConfig {
    /// Program name or path, e.g. `xclip`.
    pub program: String,

    /// Arguments passed before the text is piped in.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Depot named in the garage report ("deu entrada na garagem de ...").
    #[serde(default = "default_garage_name")]
    pub garage_name: String,

    /// Pre-filled value of the "Plantão CCO" field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cco_duty: Option<String>,

    /// Clipboard program override. When absent the platform default is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipboard: Option<ClipboardConfig>,
}

fn default_garage_name() -> String {
    DEFAULT_GARAGE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            garage_name: default_garage_name(),
            cco_duty: None,
            clipboard: None,
        }
    }
}

impl Config {
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

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive setup wizard, starting from the current configuration.
    pub fn init() -> Result<Config> {
        let current = Config::read()?;

        let garage_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptGarageName.to_string())
            .default(current.garage_name.clone())
            .interact_text()?;

        let cco_duty: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultCcoDuty.to_string())
            .default(current.cco_duty.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let clipboard_line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptClipboardCommand.to_string())
            .default(
                current
                    .clipboard
                    .as_ref()
                    .map(|c| std::iter::once(c.program.clone()).chain(c.args.iter().cloned()).collect::<Vec<_>>().join(" "))
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            garage_name: garage_name.trim().to_string(),
            cco_duty: Some(cco_duty.trim().to_string()).filter(|s| !s.is_empty()),
            clipboard: ClipboardConfig::parse(&clipboard_line),
        })
    }
}

impl ClipboardConfig {
    /// Splits a command line on whitespace; empty input means "no override".
    pub fn parse(line: &str) -> Option<ClipboardConfig> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(ClipboardConfig {
            program,
            args: parts.collect(),
        })
    }
}
