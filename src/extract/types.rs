//! Extraction types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A named field of one listing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CoinName,
    CoinSymbol,
    Price,
    MarketCap,
    Volume24h,
    PercentChange1h,
    PercentChange24h,
    PercentChange7d,
}

impl Field {
    /// Column name used in tables and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CoinName => "coin_name",
            Field::CoinSymbol => "coin_symbol",
            Field::Price => "price",
            Field::MarketCap => "market_cap",
            Field::Volume24h => "volume_24h",
            Field::PercentChange1h => "percent_change_1h",
            Field::PercentChange24h => "percent_change_24h",
            Field::PercentChange7d => "percent_change_7d",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, string-typed fields of one row before numeric conversion
///
/// Numeric fields are already cleaned: no currency symbol, no thousands
/// separators, no percent sign, and percent changes carry their sign.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldSet {
    pub coin_name: String,
    pub coin_symbol: String,
    pub price: String,
    pub market_cap: String,
    pub volume_24h: String,
    pub percent_change_1h: String,
    pub percent_change_24h: String,
    pub percent_change_7d: String,
}

impl FieldSet {
    /// The six fields that must parse as decimals, in column order
    pub fn numeric_fields(&self) -> [(Field, &str); 6] {
        [
            (Field::Price, &self.price),
            (Field::MarketCap, &self.market_cap),
            (Field::Volume24h, &self.volume_24h),
            (Field::PercentChange1h, &self.percent_change_1h),
            (Field::PercentChange24h, &self.percent_change_24h),
            (Field::PercentChange7d, &self.percent_change_7d),
        ]
    }
}

/// Expected markup structure was absent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// A row lacks the element carrying `field`
    #[error("row {row}: missing {field}")]
    MissingField { row: usize, field: Field },
}

impl ExtractionError {
    /// Index of the offending row in document order
    pub fn row(&self) -> usize {
        match self {
            ExtractionError::MissingField { row, .. } => *row,
        }
    }
}

/// What to do with a row that is missing an expected element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRowPolicy {
    /// Record a warning, drop the row and keep going
    #[default]
    Skip,
    /// Abort the whole extraction
    Fail,
}

/// Result of one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Well-formed rows in document order
    pub rows: Vec<FieldSet>,
    /// Rows dropped under [`MalformedRowPolicy::Skip`]
    pub skipped: Vec<ExtractionError>,
}
