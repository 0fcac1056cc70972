//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/ganchos/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/ganchos/` (~/.config/ganchos/)
//! - State/Logs: `$XDG_STATE_HOME/ganchos/` (~/.local/state/ganchos/)
//!
//! The config file is optional: a missing file yields the defaults of the
//! hooks this library replaces, so the binaries behave identically with no
//! setup at all.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Hook event-log configuration
    #[serde(default)]
    pub hooks: HooksConfig,

    /// Claim validator tunables
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hook event-log configuration
///
/// Paths are relative to the project the hook is invoked in, not to the
/// ganchos install.
#[derive(Debug, Deserialize, Clone)]
pub struct HooksConfig {
    /// Directory that receives the daily `eventos_<date>.jsonl` files
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Marker file whose presence enables verbose stderr diagnostics
    #[serde(default = "default_debug_marker")]
    pub debug_marker: PathBuf,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            debug_marker: default_debug_marker(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".claude/logs")
}

fn default_debug_marker() -> PathBuf {
    PathBuf::from(".claude/debug")
}

/// Claim validator tunables
#[derive(Debug, Deserialize, Clone)]
pub struct ValidatorConfig {
    /// Maximum number of candidate code files searched per claim
    #[serde(default = "default_max_code_files")]
    pub max_code_files: usize,

    /// Maximum number of `path:line` evidence entries recorded
    #[serde(default = "default_max_evidence_lines")]
    pub max_evidence_lines: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_code_files: default_max_code_files(),
            max_evidence_lines: default_max_evidence_lines(),
        }
    }
}

fn default_max_code_files() -> usize {
    20
}

fn default_max_evidence_lines() -> usize {
    3
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/ganchos/config.toml` (~/.config/ganchos/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("ganchos").join("config.toml")
    }

    /// Returns the state directory path (for diagnostic logs)
    ///
    /// `$XDG_STATE_HOME/ganchos/` (~/.local/state/ganchos/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("ganchos")
    }

    /// Ensure XDG base directory environment variables are set.
    ///
    /// This is mainly for CLI binaries that want explicit, stable path
    /// behavior before invoking other components that read these env vars.
    pub fn ensure_xdg_env() {
        let home = home_dir();

        if std::env::var("XDG_STATE_HOME").is_err() {
            std::env::set_var("XDG_STATE_HOME", home.join(".local/state"));
        }

        if std::env::var("XDG_CONFIG_HOME").is_err() {
            std::env::set_var("XDG_CONFIG_HOME", home.join(".config"));
        }
    }
}
