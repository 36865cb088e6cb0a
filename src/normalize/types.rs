//! Normalized snapshot types

use crate::extract::Field;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// One fully typed listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub coin_name: String,
    pub coin_symbol: String,
    pub price: Decimal,
    pub market_cap: Decimal,
    pub volume_24h: Decimal,
    pub percent_change_1h: Decimal,
    pub percent_change_24h: Decimal,
    pub percent_change_7d: Decimal,
    /// Wall-clock time the table was normalized, shared by every record
    pub observed_at: DateTime<Utc>,
}

/// Ordered, immutable table of at most one page of records
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnapshotTable {
    records: Vec<Record>,
}

impl SnapshotTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Records in source-page order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observation time of the table, if it has any records
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.records.first().map(|r| r.observed_at)
    }

    /// Look up a record by symbol
    pub fn get(&self, symbol: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.coin_symbol == symbol)
    }

    /// Records keyed by symbol; the first occurrence wins on duplicates
    pub fn by_symbol(&self) -> BTreeMap<&str, &Record> {
        let mut map = BTreeMap::new();
        for record in &self.records {
            map.entry(record.coin_symbol.as_str()).or_insert(record);
        }
        map
    }
}

impl<'a> IntoIterator for &'a SnapshotTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A numeric field failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("row {row} ({symbol}): {field} value {value:?} is not a plain decimal")]
    InvalidNumber {
        row: usize,
        symbol: String,
        field: Field,
        value: String,
    },
}
