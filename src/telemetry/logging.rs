//! Structured logging setup

use crate::config::LogFormat;
use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `<root>/<YYYY>/<YYYY-MM>/<YYYY-MM-DD>.log`
pub fn log_file_path(root: &Path, day: NaiveDate) -> PathBuf {
    root.join(day.format("%Y").to_string())
        .join(day.format("%Y-%m").to_string())
        .join(format!("{}.log", day.format("%Y-%m-%d")))
}

/// Open (append) the log file for `day`, creating its directories
pub fn open_log_file(root: &Path, day: NaiveDate) -> std::io::Result<File> {
    let path = log_file_path(root, day);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize logging to stderr and, when given, a log file
pub fn init_logging(level: &str, format: LogFormat, file: Option<File>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let file = file.map(Mutex::new);

    let result = match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(file.map(|f| fmt::layer().with_ansi(false).with_writer(f)))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(file.map(|f| fmt::layer().json().with_writer(f)))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to init logging: {}", e))?;

    Ok(())
}
