//! Plain-text rendering for the terminal

use super::{BarPoint, ChangeRow, Timeframe};
use crate::export::COLUMNS;
use crate::normalize::Record;
use std::fmt::Write;

/// Columns of the exported dataset, `date` included
pub const DATASET_COLUMNS: usize = COLUMNS.len();

/// `Data Dimension: R rows and C columns.`
pub fn dimension_line(rows: usize) -> String {
    format!(
        "Data Dimension: {} rows and {} columns.",
        rows, DATASET_COLUMNS
    )
}

/// Price table, one line per record
pub fn render_records(records: &[&Record]) -> String {
    let name_width = records
        .iter()
        .map(|r| r.coin_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("coin_name".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<8}  {:>16}  {:>20}  {:>18}  {:>8}  {:>8}  {:>8}",
        "coin_name", "symbol", "price", "market_cap", "volume_24h", "1h %", "24h %", "7d %",
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<8}  {:>16}  {:>20}  {:>18}  {:>8}  {:>8}  {:>8}",
            r.coin_name,
            r.coin_symbol,
            r.price.to_string(),
            r.market_cap.to_string(),
            r.volume_24h.to_string(),
            r.percent_change_1h.to_string(),
            r.percent_change_24h.to_string(),
            r.percent_change_7d.to_string(),
        );
    }
    out
}

fn direction(positive: bool) -> &'static str {
    if positive {
        "up"
    } else {
        "down"
    }
}

/// Percent change table with direction flags
pub fn render_change_table(rows: &[ChangeRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8}  {:>8}  {:>8}  {:>8}  {:>5}  {:>5}  {:>5}",
        "symbol", "1h %", "24h %", "7d %", "1h", "24h", "7d"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<8}  {:>8}  {:>8}  {:>8}  {:>5}  {:>5}  {:>5}",
            row.symbol,
            row.percent_change_1h.to_string(),
            row.percent_change_24h.to_string(),
            row.percent_change_7d.to_string(),
            direction(row.positive_1h),
            direction(row.positive_24h),
            direction(row.positive_7d),
        );
    }
    out
}

/// Chart series as a caption plus one line per bar
pub fn render_bars(bars: &[BarPoint], timeframe: Timeframe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", timeframe.caption());
    for bar in bars {
        let _ = writeln!(
            out,
            "{:<8}  {:>8}  {}",
            bar.symbol,
            bar.value.to_string(),
            direction(bar.positive)
        );
    }
    out
}
