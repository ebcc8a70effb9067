//! Configuration file loading with precedence handling.

use super::keybindings::KeyBindings;
use crate::state::EngineConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "POCKETCALC_CONFIG";

/// Environment variable overriding the history capacity.
pub const HISTORY_CAPACITY_ENV_VAR: &str = "POCKETCALC_HISTORY_CAPACITY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A `[keybindings]` entry names an unknown key or action.
    #[error("Invalid key binding {key:?}: {reason}")]
    InvalidBinding {
        /// Key as written in the config file.
        key: String,
        /// Why the binding was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pocketcalc/config.toml`.
///
/// ```toml
/// max_operand_length = 12
/// history_capacity = 5
///
/// [keybindings]
/// "p" = "percent"
/// "enter" = "equals"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Maximum typed operand length.
    #[serde(default)]
    pub max_operand_length: Option<usize>,

    /// Number of completed calculations kept in history.
    #[serde(default)]
    pub history_capacity: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Extra key bindings: key name to event name (or `"quit"`).
    #[serde(default)]
    pub keybindings: Option<HashMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Maximum typed operand length.
    pub max_operand_length: usize,
    /// History capacity.
    pub history_capacity: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Key binding overrides, applied on top of the defaults.
    pub keybindings: HashMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            max_operand_length: engine.max_operand_length,
            history_capacity: engine.history_capacity,
            log_file_path: default_log_path(),
            keybindings: HashMap::new(),
        }
    }
}

impl ResolvedConfig {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for limits below 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_operand_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_operand_length",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Engine limits from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_operand_length: self.max_operand_length,
            history_capacity: self.history_capacity,
        }
    }

    /// Default key bindings with the configured overrides applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBinding` for unknown keys or actions.
    pub fn key_bindings(&self) -> Result<KeyBindings, ConfigError> {
        KeyBindings::default().with_overrides(&self.keybindings)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pocketcalc/pocketcalc.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pocketcalc").join("pocketcalc.log")
    } else {
        PathBuf::from("pocketcalc.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/pocketcalc/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pocketcalc").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `POCKETCALC_CONFIG` environment variable
/// 3. Default path `~/.config/pocketcalc/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `POCKETCALC_HISTORY_CAPACITY`: Override history capacity
///
/// Unparsable values are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(HISTORY_CAPACITY_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(capacity) => config.history_capacity = capacity,
            Err(e) => warn!(
                value = %raw,
                error = %e,
                "Ignoring unparsable {}", HISTORY_CAPACITY_ENV_VAR
            ),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        max_operand_length: config
            .max_operand_length
            .unwrap_or(defaults.max_operand_length),
        history_capacity: config.history_capacity.unwrap_or(defaults.history_capacity),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings: config.keybindings.unwrap_or(defaults.keybindings),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    history_capacity_override: Option<usize>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(capacity) = history_capacity_override {
        config.history_capacity = capacity;
    }

    if let Some(path) = log_file_override {
        config.log_file_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
