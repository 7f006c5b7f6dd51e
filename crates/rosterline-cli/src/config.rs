//! CLI configuration.
//!
//! Config lives in a TOML file. The path is resolved in order:
//!
//! 1. the `--config` flag
//! 2. the `ROSTERLINE_CONFIG` environment variable
//! 3. `<platform config dir>/rosterline/config.toml`
//!
//! A missing file is not an error; defaults apply.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name, used for the config directory and messages.
pub const PROJECT_NAME: &str = "rosterline";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ROSTERLINE_CONFIG";

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterlineConfig {
    /// Output formatting.
    pub output: OutputConfig,
    /// Logging defaults.
    pub logging: LoggingConfig,
    /// Timeline defaults.
    pub timeline: TimelineConfig,
}

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level; `RUST_LOG` overrides it.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Timeline options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Sort assignments by start date even without `--sorted`.
    pub sort_by_start: bool,
}

impl RosterlineConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve the config file path from an explicit flag, the environment,
    /// or the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_config_path()
    }

    /// Load config, falling back to defaults when the file does not exist.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a specific config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check.
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::config(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
