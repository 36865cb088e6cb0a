//! CLI interface for coin-snapshot
//!
//! Provides subcommands for:
//! - `show`: Print the dashboard for the current snapshot
//! - `export`: Write the selected coins to CSV
//! - `date`: Show the snapshot date and source URL
//! - `config`: Show the effective configuration

mod export;
mod show;

pub use export::ExportArgs;
pub use show::{OutputFormat, ShowArgs};

use crate::snapshot::date::{current_snapshot_date, most_recent_sunday};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "coin-snapshot")]
#[command(about = "Top-20 cryptocurrency snapshot from CoinMarketCap historical data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    /// Day to treat as today (YYYY-MM-DD); the snapshot is the Sunday on or before it
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

impl Cli {
    /// Snapshot date for this invocation
    pub fn snapshot_date(&self) -> NaiveDate {
        match self.date {
            Some(day) => most_recent_sunday(day),
            None => current_snapshot_date(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print price table, percent change table and change chart series
    Show(ShowArgs),
    /// Export selected coins to CSV
    Export(ExportArgs),
    /// Show the snapshot date and source URL
    Date,
    /// Show the effective configuration
    Config,
}
