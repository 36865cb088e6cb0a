//! Snapshot date helpers
//!
//! The historical listing is refreshed once a week, on Sunday, so the most
//! recent snapshot is always the last Sunday on or before today.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Most recent Sunday on or before `today`
pub fn most_recent_sunday(today: NaiveDate) -> NaiveDate {
    let days_since_sunday = today.weekday().num_days_from_sunday();
    today - Duration::days(days_since_sunday as i64)
}

/// Snapshot date for the local calendar day
pub fn current_snapshot_date() -> NaiveDate {
    most_recent_sunday(Local::now().date_naive())
}

/// `YYYYMMDD` form used in the historical page URL
pub fn url_segment(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Human-readable form shown next to the table, e.g. `January 07, 2024.`
pub fn display(date: NaiveDate) -> String {
    date.format("%B %d, %Y.").to_string()
}
