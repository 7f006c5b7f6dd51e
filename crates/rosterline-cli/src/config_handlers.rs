//! Handler functions for `rosterline config` subcommands.
//!
//! Each handler returns the text to print so `main` owns stdout.

use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::{PROJECT_NAME, RosterlineConfig};
use crate::error::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: &ConfigAction) -> Result<String> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => cmd_config_show(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, key),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), *force),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<String> {
    match RosterlineConfig::resolve_config_path(config_path) {
        Some(path) => {
            if !path.exists() {
                tracing::warn!(
                    "config file does not exist; run `{PROJECT_NAME} config init` to create it"
                );
            }
            Ok(path.display().to_string())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Show the effective configuration as TOML.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<String> {
    RosterlineConfig::load(config_path)?.to_toml_string()
}

/// Get a configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = RosterlineConfig::load(config_path)?;
    let value = toml::Value::try_from(&config)?;
    match get_nested_value(&value, key) {
        Some(val) => Ok(format_toml_value(val)),
        None => Err(Error::config(format!(
            "Key '{key}' not found in configuration"
        ))),
    }
}

/// Create a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<String> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => RosterlineConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = RosterlineConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    tracing::info!(path = %path.display(), "wrote default config");
    Ok(format!("Config file created at {}", path.display()))
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
