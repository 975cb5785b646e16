//! User configuration.
//!
//! Loaded from `<config dir>/tree2csv/config.toml`. The file is entirely
//! optional: every field falls back to its default, and a missing file
//! yields the default configuration without complaint. Command-line flags
//! override whatever the file says.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::output::Format;

const DEFAULT_DELIMITER: char = ';';
const DEFAULT_PROGRESS_EVERY: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Field delimiter for CSV output (single ASCII character).
    pub delimiter: char,
    /// Number of lines between progress redraws.
    pub progress_every: usize,
    /// Output format used when `--format` is not given.
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            progress_every: DEFAULT_PROGRESS_EVERY,
            format: Format::Csv,
        }
    }
}

impl Config {
    /// Path of the config file inside the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(dir.join("tree2csv").join("config.toml"))
    }

    /// Load the configuration, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }
}
