//! Location of the application data directory.
//!
//! The configuration file always lives here. The record store defaults to the
//! same directory unless the configuration names another one.
//!
//! | OS      | Base path                                 |
//! |---------|-------------------------------------------|
//! | Windows | `%LOCALAPPDATA%\fuelog\fuelog`            |
//! | macOS   | `$HOME/Library/Application Support/fuelog/fuelog` |
//! | Other   | `$HOME/.local/share/fuelog/fuelog`        |

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "fuelog";
pub const APP_NAME: &str = "fuelog";

/// Per-OS application data directory holding the config and, by default, the record store.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    /// Resolves the base path for the current OS.
    ///
    /// Nothing is created on disk here. When the environment variable for the
    /// platform is unset, the path is taken relative to the working directory.
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of a file inside the data directory.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Name of the file, relative to the base path
    ///
    /// # Returns
    ///
    /// The joined path. The base directory is created first if it is missing,
    /// so an error means it could not be created.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}
