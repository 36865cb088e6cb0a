//! Normalization
//!
//! Converts extracted field sets into a typed [`SnapshotTable`]. Every
//! record is stamped with the same observation time.

mod types;

pub use types::{NormalizationError, Record, SnapshotTable};

use crate::extract::{Field, FieldSet};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse plain decimal notation: optional leading `-`, digits, optional
/// fraction. Grouping separators, exponents and currency symbols are rejected.
/// Magnitudes beyond `Decimal::MAX` (about 7.9e28) are rejected too.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let mut parts = digits.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next();

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match fraction {
        Some(f) => all_digits(whole) && all_digits(f) && !(whole.is_empty() && f.is_empty()),
        None => !whole.is_empty() && all_digits(whole),
    };
    if !well_formed {
        return None;
    }

    Decimal::from_str(text).ok()
}

/// Build a table from extracted rows; the first bad value aborts the table
pub fn normalize(
    rows: Vec<FieldSet>,
    observed_at: DateTime<Utc>,
) -> Result<SnapshotTable, NormalizationError> {
    let mut records = Vec::with_capacity(rows.len());

    for (index, fields) in rows.into_iter().enumerate() {
        let mut values = [Decimal::ZERO; 6];
        for (slot, (field, text)) in values.iter_mut().zip(fields.numeric_fields()) {
            *slot = parse_decimal(text).ok_or_else(|| invalid(index, &fields, field, text))?;
        }
        let [price, market_cap, volume_24h, percent_change_1h, percent_change_24h, percent_change_7d] =
            values;

        records.push(Record {
            coin_name: fields.coin_name,
            coin_symbol: fields.coin_symbol,
            price,
            market_cap,
            volume_24h,
            percent_change_1h,
            percent_change_24h,
            percent_change_7d,
            observed_at,
        });
    }

    tracing::debug!(records = records.len(), observed_at = %observed_at, "Normalized snapshot");

    Ok(SnapshotTable::new(records))
}

fn invalid(row: usize, fields: &FieldSet, field: Field, text: &str) -> NormalizationError {
    NormalizationError::InvalidNumber {
        row,
        symbol: fields.coin_symbol.clone(),
        field,
        value: text.to_string(),
    }
}
