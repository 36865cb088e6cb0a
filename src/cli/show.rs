//! Show command implementation

use crate::config::{Config, DashboardConfig};
use crate::dashboard::{
    dimension_line, render_bars, render_change_table, render_records, symbol_options, BarPoint,
    ChangeRow, DashboardQuery, Timeframe,
};
use crate::normalize::Record;
use crate::snapshot::date::display;
use crate::snapshot::SnapshotCache;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Output format for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Coin symbol to include (repeatable); all coins when omitted
    #[arg(short = 's', long = "symbol")]
    pub symbols: Vec<String>,

    /// Number of coins to display
    #[arg(long)]
    pub top: Option<usize>,

    /// Percent change timeframe for the chart series
    #[arg(long, value_enum)]
    pub timeframe: Option<Timeframe>,

    /// Keep table order in the chart series instead of sorting by value
    #[arg(long)]
    pub no_sort: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct JsonView<'a> {
    snapshot_date: NaiveDate,
    /// Every symbol in the snapshot, sorted
    symbols: &'a [&'a str],
    records: &'a [&'a Record],
    changes: &'a [ChangeRow],
    timeframe: Timeframe,
    bars: &'a [BarPoint],
}

impl ShowArgs {
    /// Dashboard query from arguments over configured defaults
    pub fn query(&self, defaults: &DashboardConfig) -> DashboardQuery {
        DashboardQuery {
            symbols: (!self.symbols.is_empty()).then(|| self.symbols.clone()),
            top_n: self.top.unwrap_or(defaults.top_n),
            timeframe: self.timeframe.unwrap_or(defaults.timeframe),
            sort_values: defaults.sort_values && !self.no_sort,
        }
    }

    pub async fn execute(
        &self,
        cache: &SnapshotCache,
        config: &Config,
        date: NaiveDate,
    ) -> anyhow::Result<()> {
        let table = cache.get_or_compute(date).await?;
        let view = self.query(&config.dashboard).apply(&table);
        let symbols = symbol_options(&table);

        match self.format {
            OutputFormat::Json => {
                let json = JsonView {
                    snapshot_date: date,
                    symbols: &symbols,
                    records: &view.shown,
                    changes: &view.changes,
                    timeframe: view.timeframe,
                    bars: &view.bars,
                };
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Table => {
                println!("Price Data of Selected Cryptocurrency");
                println!("{}", dimension_line(view.shown.len()));
                println!("Date since last update: {}", display(date));
                println!("Available symbols: {}", symbols.join(", "));
                println!();
                print!("{}", render_records(&view.shown));
                println!();
                println!("Table of % Price Change");
                print!("{}", render_change_table(&view.changes));
                println!();
                println!("% Price Change");
                print!("{}", render_bars(&view.bars, view.timeframe));
            }
        }

        Ok(())
    }
}
