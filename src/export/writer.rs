//! CSV writer

use super::ExportError;
use crate::normalize::Record;
use csv::Writer;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Header row, in column order
pub const COLUMNS: [&str; 9] = [
    "date",
    "coin_name",
    "coin_symbol",
    "price",
    "market_cap",
    "volume_24h",
    "percent_change_1h",
    "percent_change_24h",
    "percent_change_7d",
];

/// Write a header row and one row per record
pub fn write_csv<W: Write>(out: W, records: &[&Record]) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(COLUMNS)?;

    for record in records {
        writer.write_record([
            record.observed_at.to_rfc3339(),
            record.coin_name.clone(),
            record.coin_symbol.clone(),
            record.price.to_string(),
            record.market_cap.to_string(),
            record.volume_24h.to_string(),
            record.percent_change_1h.to_string(),
            record.percent_change_24h.to_string(),
            record.percent_change_7d.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// CSV document as a string
pub fn to_csv_string(records: &[&Record]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the CSV file at `path`, creating parent directories
pub fn export_to_file(path: &Path, records: &[&Record]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    write_csv(file, records)?;

    tracing::info!(path = ?path, rows = records.len(), "Exported snapshot CSV");
    Ok(())
}
