//! Dashboard queries
//!
//! Read-only views over a [`SnapshotTable`]: symbol selection, top-N,
//! the percent change table and the bar series behind the change chart.

mod change;
mod render;

pub use change::{bar_series, change_table, BarPoint, ChangeRow};
pub use render::{dimension_line, render_bars, render_change_table, render_records};

use crate::normalize::{Record, SnapshotTable};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percent change window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    #[value(name = "1h")]
    Hour,
    #[serde(rename = "24h")]
    #[value(name = "24h")]
    Day,
    #[default]
    #[serde(rename = "7d")]
    #[value(name = "7d")]
    Week,
}

impl Timeframe {
    /// Caption shown above the chart
    pub fn caption(&self) -> &'static str {
        match self {
            Timeframe::Hour => "1 hour period",
            Timeframe::Day => "24 hour period",
            Timeframe::Week => "7 days period",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Timeframe::Hour => "1h",
            Timeframe::Day => "24h",
            Timeframe::Week => "7d",
        };
        f.write_str(s)
    }
}

/// Symbols offered for selection, sorted
pub fn symbol_options(table: &SnapshotTable) -> Vec<&str> {
    let mut symbols: Vec<&str> = table.iter().map(|r| r.coin_symbol.as_str()).collect();
    symbols.sort_unstable();
    symbols
}

/// Records whose symbol is selected, in table order; `None` selects all
pub fn select_symbols<'a>(table: &'a SnapshotTable, symbols: Option<&[String]>) -> Vec<&'a Record> {
    match symbols {
        None => table.iter().collect(),
        Some(selected) => table
            .iter()
            .filter(|r| selected.iter().any(|s| s.eq_ignore_ascii_case(&r.coin_symbol)))
            .collect(),
    }
}

/// First `n` records; at least one is kept when available
pub fn top_n<'a>(records: &[&'a Record], n: usize) -> Vec<&'a Record> {
    records.iter().take(n.max(1)).copied().collect()
}

/// One dashboard request
#[derive(Debug, Clone, Default)]
pub struct DashboardQuery {
    /// Selected symbols; `None` selects every coin
    pub symbols: Option<Vec<String>>,
    pub top_n: usize,
    pub timeframe: Timeframe,
    pub sort_values: bool,
}

/// Everything the dashboard shows for one query
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    /// Selected records before the top-N cut (what gets exported)
    pub selected: Vec<&'a Record>,
    /// Records shown in the price table
    pub shown: Vec<&'a Record>,
    pub changes: Vec<ChangeRow>,
    pub bars: Vec<BarPoint>,
    pub timeframe: Timeframe,
}

impl DashboardQuery {
    /// Evaluate the query against a table
    pub fn apply<'a>(&self, table: &'a SnapshotTable) -> DashboardView<'a> {
        let selected = select_symbols(table, self.symbols.as_deref());
        let shown = top_n(&selected, self.top_n);
        let changes = change_table(&shown);
        let bars = bar_series(&changes, self.timeframe, self.sort_values);

        tracing::debug!(
            selected = selected.len(),
            shown = shown.len(),
            timeframe = %self.timeframe,
            "Dashboard query evaluated"
        );

        DashboardView {
            selected,
            shown,
            changes,
            bars,
            timeframe: self.timeframe,
        }
    }
}
