//! coin-snapshot: Top-20 cryptocurrency snapshot from CoinMarketCap historical data
//!
//! This library provides the core components for:
//! - Snapshot date selection (most recent Sunday)
//! - Fetching the historical snapshot page
//! - Extracting the ranked coin rows from its markup
//! - Normalizing raw text into typed records
//! - Memoizing one snapshot table per date
//! - Dashboard queries, text rendering and CSV export
//! - Logging with dated log files and retention

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod snapshot;
pub mod telemetry;
