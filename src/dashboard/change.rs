//! Percent change table and chart series

use super::Timeframe;
use crate::normalize::Record;
use rust_decimal::Decimal;
use serde::Serialize;

/// Percent changes of one coin with their direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRow {
    pub symbol: String,
    pub percent_change_1h: Decimal,
    pub percent_change_24h: Decimal,
    pub percent_change_7d: Decimal,
    pub positive_1h: bool,
    pub positive_24h: bool,
    pub positive_7d: bool,
}

impl ChangeRow {
    pub fn from_record(record: &Record) -> Self {
        Self {
            symbol: record.coin_symbol.clone(),
            percent_change_1h: record.percent_change_1h,
            percent_change_24h: record.percent_change_24h,
            percent_change_7d: record.percent_change_7d,
            positive_1h: record.percent_change_1h > Decimal::ZERO,
            positive_24h: record.percent_change_24h > Decimal::ZERO,
            positive_7d: record.percent_change_7d > Decimal::ZERO,
        }
    }

    /// Change and direction for a timeframe
    pub fn get(&self, timeframe: Timeframe) -> (Decimal, bool) {
        match timeframe {
            Timeframe::Hour => (self.percent_change_1h, self.positive_1h),
            Timeframe::Day => (self.percent_change_24h, self.positive_24h),
            Timeframe::Week => (self.percent_change_7d, self.positive_7d),
        }
    }
}

/// One bar of the change chart; `positive` picks green over red
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarPoint {
    pub symbol: String,
    pub value: Decimal,
    pub positive: bool,
}

pub fn change_table(records: &[&Record]) -> Vec<ChangeRow> {
    records.iter().map(|r| ChangeRow::from_record(r)).collect()
}

/// Bars for `timeframe`, ascending by value when `sort_values` is set
pub fn bar_series(rows: &[ChangeRow], timeframe: Timeframe, sort_values: bool) -> Vec<BarPoint> {
    let mut bars: Vec<BarPoint> = rows
        .iter()
        .map(|row| {
            let (value, positive) = row.get(timeframe);
            BarPoint {
                symbol: row.symbol.clone(),
                value,
                positive,
            }
        })
        .collect();

    if sort_values {
        bars.sort_by(|a, b| a.value.cmp(&b.value));
    }
    bars
}
