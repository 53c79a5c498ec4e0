use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BumpError, Result};

/// Name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "bump.toml";

/// Levels accepted for `[logging] level`
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Represents the complete configuration for bump.
///
/// Only diagnostics are configurable. Branch naming and the commit message
/// are fixed; unknown sections are rejected so they never go unnoticed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Diagnostic log settings. `BUMP_LOG` in the environment takes precedence.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse and validate configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| BumpError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(BumpError::config(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// Candidate configuration files, in lookup order.
///
/// 1. `bump.toml` in `dir`
/// 2. `bump.toml` in the user config directory
pub fn config_candidates(dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![dir.join(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join(CONFIG_FILE_NAME));
    }
    candidates
}

/// Loads configuration for a project rooted at `dir`, or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(dir: &Path) -> Result<Config> {
    match config_candidates(dir).into_iter().find(|p| p.is_file()) {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Loads configuration from an explicit file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|e| BumpError::io(path, e))?;
    Config::from_toml(&text).map_err(|e| match e {
        BumpError::Config(msg) => BumpError::config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}
