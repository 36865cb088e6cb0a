//! Row extraction
//!
//! Turns snapshot page markup into string-typed field sets. The selector
//! logic lives behind [`RowExtractor`] so it can be swapped or exercised
//! against fixture markup without touching fetch or normalization.

mod clean;
mod cmc;
#[cfg(test)]
pub(crate) mod fixture;
mod types;

pub use clean::{amount, label, percent, ChangeMarker};
pub use cmc::{CoinMarketCapExtractor, DEFAULT_ROW_LIMIT};
pub use types::{Extraction, ExtractionError, Field, FieldSet, MalformedRowPolicy};

/// Trait for markup extraction strategies
pub trait RowExtractor: Send + Sync {
    /// Extract at most the configured number of rows, in document order
    fn extract(&self, markup: &str) -> Result<Extraction, ExtractionError>;
}
