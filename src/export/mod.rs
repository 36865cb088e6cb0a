//! Dataset export
//!
//! Writes records as CSV with the dashboard's dataset columns

mod writer;

pub use writer::{export_to_file, to_csv_string, write_csv, COLUMNS};

use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
