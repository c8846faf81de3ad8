//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/pressbeat/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/pressbeat/` (~/.config/pressbeat/)
//! - State/Logs: `$XDG_STATE_HOME/pressbeat/` (~/.local/state/pressbeat/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
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
    /// Tracking behavior (resolver toggles and label overrides)
    #[serde(default)]
    pub tracking: TrackingConfig,

    /// Analytics collector configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tracking behavior configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TrackingConfig {
    /// Report republishes of an already-published post as a separate
    /// "update" action instead of folding them into "publish"
    #[serde(default = "default_separate_update_events")]
    pub separate_update_events: bool,

    /// Per-action display label overrides, keyed by action key
    /// (publish_post, update_post, comment_submitted, comment_approved)
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            separate_update_events: default_separate_update_events(),
            labels: HashMap::new(),
        }
    }
}

fn default_separate_update_events() -> bool {
    true
}

/// Analytics collector configuration
///
/// When enabled, pressbeat sends one measurement request per tracked
/// lifecycle event to the configured endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Enable/disable sending to the collector
    #[serde(default)]
    pub enabled: bool,

    /// Measurement endpoint URL (e.g., `https://www.google-analytics.com/collect`)
    pub endpoint_url: Option<String>,

    /// Property/tracking id the events are attributed to
    pub tracking_id: Option<String>,

    /// Event category reported with every event
    #[serde(default = "default_category")]
    pub category: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_analytics_timeout")]
    pub timeout_secs: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint_url: None,
            tracking_id: None,
            category: default_category(),
            timeout_secs: default_analytics_timeout(),
        }
    }
}

impl AnalyticsConfig {
    /// Check if the collector is properly configured and enabled
    pub fn is_ready(&self) -> bool {
        self.enabled && self.endpoint_url.is_some() && self.tracking_id.is_some()
    }

    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.endpoint_url.is_none() {
            return Err(Error::Config(
                "analytics.endpoint_url is required when analytics is enabled".to_string(),
            ));
        }
        if self.tracking_id.is_none() {
            return Err(Error::Config(
                "analytics.tracking_id is required when analytics is enabled".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config(
                "analytics.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_category() -> String {
    "Content".to_string()
}

fn default_analytics_timeout() -> u64 {
    10
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
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
    /// `$XDG_CONFIG_HOME/pressbeat/config.toml` (~/.config/pressbeat/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("pressbeat").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/pressbeat/` (~/.local/state/pressbeat/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("pressbeat")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/pressbeat/pressbeat.log` (~/.local/state/pressbeat/pressbeat.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("pressbeat.log")
    }
}
