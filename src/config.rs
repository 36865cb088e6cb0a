//! Configuration types for coin-snapshot

use crate::dashboard::Timeframe;
use crate::extract::{MalformedRowPolicy, DEFAULT_ROW_LIMIT};
use crate::fetch::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Snapshot source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Provider scheme and host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Rows taken from the top of the listing
    #[serde(default = "default_row_limit")]
    pub row_limit: usize,

    /// Handling of rows missing an expected element
    #[serde(default)]
    pub malformed_rows: MalformedRowPolicy,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_row_limit() -> usize {
    DEFAULT_ROW_LIMIT
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            row_limit: default_row_limit(),
            malformed_rows: MalformedRowPolicy::default(),
        }
    }
}

/// Dashboard defaults, overridable per command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of coins shown
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Percent change timeframe for the bar series
    #[serde(default)]
    pub timeframe: Timeframe,

    /// Sort the bar series by value
    #[serde(default = "default_true")]
    pub sort_values: bool,
}

fn default_top_n() -> usize {
    DEFAULT_ROW_LIMIT
}
fn default_true() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            timeframe: Timeframe::default(),
            sort_values: true,
        }
    }
}

/// CSV export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./out")
}
fn default_file_name() -> String {
    "crypto.csv".to_string()
}

impl ExportConfig {
    /// Default export destination
    pub fn path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_name: default_file_name(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Root of the dated log tree; no file logging when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Log files older than this many days are deleted at startup
    #[serde(default = "default_log_retention_days")]
    pub log_retention_days: u32,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_retention_days() -> u32 {
    60
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            log_dir: None,
            log_retention_days: default_log_retention_days(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values outside the ranges the snapshot supports
    pub fn validate(&self) -> anyhow::Result<()> {
        let limit = 1..=DEFAULT_ROW_LIMIT;
        if !limit.contains(&self.source.row_limit) {
            anyhow::bail!(
                "source.row_limit must be between 1 and {}, got {}",
                DEFAULT_ROW_LIMIT,
                self.source.row_limit
            );
        }
        if !limit.contains(&self.dashboard.top_n) {
            anyhow::bail!(
                "dashboard.top_n must be between 1 and {}, got {}",
                DEFAULT_ROW_LIMIT,
                self.dashboard.top_n
            );
        }
        Ok(())
    }
}
