//! Log retention
//!
//! Deletes dated log files older than the retention window. Only files
//! named `<YYYY-MM-DD>.log` two levels below the root are considered.

use chrono::{Duration, NaiveDate};
use std::fs;
use std::io;
use std::path::Path;

/// Delete log files dated before `today - retention_days`; returns the
/// number of files removed. A window too long to represent removes nothing.
pub fn prune_logs(root: &Path, retention_days: u32, today: NaiveDate) -> io::Result<usize> {
    if !root.is_dir() {
        return Ok(0);
    }

    // A window reaching past the calendar range expires nothing
    let Some(cutoff) = today.checked_sub_signed(Duration::days(i64::from(retention_days))) else {
        return Ok(0);
    };
    let mut removed = 0;

    for year in fs::read_dir(root)? {
        let year = year?.path();
        if !year.is_dir() {
            continue;
        }
        for month in fs::read_dir(&year)? {
            let month = month?.path();
            if !month.is_dir() {
                continue;
            }
            for entry in fs::read_dir(&month)? {
                let path = entry?.path();
                let Some(day) = log_date(&path) else {
                    continue;
                };
                if day < cutoff {
                    fs::remove_file(&path)?;
                    removed += 1;
                    tracing::info!(path = ?path, "Deleted log file");
                }
            }
        }
    }

    Ok(removed)
}

fn log_date(path: &Path) -> Option<NaiveDate> {
    if path.extension()? != "log" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}
