//! Configuration management for the fuelog application.
//!
//! Settings live in `config.json` inside the per-OS application data
//! directory (see [`DataStorage`]). A missing file is not an error: every
//! section is optional and falls back to its defaults, so the tool works
//! without any setup.
//!
//! ## Configuration Structure
//!
//! - **Report**: idling marker, treatment of suspicious readings, currency label
//! - **Store**: where the trip log, initial record and reports are kept
//!
//! ```rust,no_run
//! use fuelog::libs::config::Config;
//!
//! let config = Config::read()?;
//! let report = config.report_or_default();
//! println!("Idling trips are marked with '{}'", report.idling_marker);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::daily::DEFAULT_IDLING_MARKER;
use super::data_storage::DataStorage;
use super::validation::ReadingCheck;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Settings that affect how reports are computed and shown.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Destination substring that marks a trip as idling. Matched case-sensitively;
    /// an empty marker marks no trip as idling.
    pub idling_marker: String,

    /// What the `daily` command does with decreasing odometer or negative fuel readings.
    #[serde(default)]
    pub reading_check: ReadingCheck,

    /// Label printed after cost values.
    pub currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            idling_marker: DEFAULT_IDLING_MARKER.to_string(),
            reading_check: ReadingCheck::default(),
            currency: "JPY".to_string(),
        }
    }
}

/// Location of the CSV record store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: DataStorage::new().base_path().to_path_buf(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,
}

impl Config {
    /// Reads the configuration from the default location, or returns defaults if there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from `path`; a missing file yields the defaults.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes pretty-printed JSON to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    pub fn report_or_default(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    pub fn store_or_default(&self) -> StoreConfig {
        self.store.clone().unwrap_or_default()
    }

    /// Interactive setup; existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "report".to_string(),
                name: "Report".to_string(),
            },
            ConfigModule {
                key: "store".to_string(),
                name: "Store".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "report" => {
                    let default = config.report_or_default();
                    msg_print!(Message::ConfigModuleReport);

                    let checks = [ReadingCheck::Off, ReadingCheck::Warn, ReadingCheck::Reject];
                    let check_index = checks.iter().position(|c| *c == default.reading_check).unwrap_or(1);

                    config.report = Some(ReportConfig {
                        idling_marker: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdlingMarker.to_string())
                            .default(default.idling_marker)
                            .interact_text()?,
                        reading_check: checks[Select::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptReadingCheck.to_string())
                            .items(&["off", "warn", "reject"])
                            .default(check_index)
                            .interact()?],
                        currency: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCurrency.to_string())
                            .default(default.currency)
                            .interact_text()?,
                    });
                }
                "store" => {
                    let default = config.store_or_default();
                    msg_print!(Message::ConfigModuleStore);
                    let data_dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDataDir.to_string())
                        .default(default.data_dir.display().to_string())
                        .interact_text()?;
                    config.store = Some(StoreConfig {
                        data_dir: PathBuf::from(data_dir),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
