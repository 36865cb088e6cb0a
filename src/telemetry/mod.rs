//! Telemetry module
//!
//! Logging to stderr plus a dated log file tree, and log retention

mod logging;
mod retention;

pub use logging::{init_logging, log_file_path, open_log_file};
pub use retention::prune_logs;

use crate::config::TelemetryConfig;
use chrono::Local;

/// Returned by [`init_telemetry`]; hold it for the life of the process
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    let today = Local::now().date_naive();

    let file = match &config.log_dir {
        Some(dir) => Some(open_log_file(dir, today)?),
        None => None,
    };

    init_logging(&config.log_level, config.log_format, file)?;

    if let Some(dir) = &config.log_dir {
        match prune_logs(dir, config.log_retention_days, today) {
            Ok(removed) => tracing::debug!(removed, dir = ?dir, "Log retention applied"),
            Err(e) => tracing::warn!(error = %e, dir = ?dir, "Log retention failed"),
        }
    }

    Ok(TelemetryGuard { _priv: () })
}
