//! Application configuration management.
//!
//! Settings live in a JSON file in the platform data directory. The config
//! is deliberately small: a default employee for the tracking commands and
//! the seeding depth. `Config::init` runs the interactive setup used by the
//! `init` command; everything else reads the file silently and falls back
//! to defaults when it does not exist yet.

use crate::libs::data_storage::DataStorage;
use crate::libs::sample::DEFAULT_MONTHS_BACK;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Seed-data generation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeedConfig {
    /// How many calendar months of history the seeder produces.
    pub months_back: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            months_back: DEFAULT_MONTHS_BACK,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Username the tracking commands act on when `--employee` is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_employee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive setup wizard. Starts from the current configuration so
    /// re-running `init` edits rather than resets.
    pub fn init() -> Result<Self> {
        let mut config = Config::read().unwrap_or_default();

        let current = config.default_employee.clone().unwrap_or_default();
        let username: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Default employee username (leave empty for none)")
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        config.default_employee = if username.trim().is_empty() {
            None
        } else {
            Some(username.trim().to_string())
        };

        let months_back: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Months of history generated by seed")
            .default(config.seed.clone().unwrap_or_default().months_back)
            .interact_text()?;
        config.seed = Some(SeedConfig { months_back });

        Ok(config)
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
