//! Snapshot pipeline
//!
//! Fetch → extract → normalize for one historical date, memoized per
//! process by [`SnapshotCache`].

mod cache;
pub mod date;
mod pipeline;

pub use cache::SnapshotCache;
pub use pipeline::SnapshotPipeline;

use crate::extract::ExtractionError;
use crate::fetch::FetchError;
use crate::normalize::NormalizationError;
use thiserror::Error;

/// Any failure of one pipeline run; none of them leave partial results
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("normalization failed: {0}")]
    Normalization(#[from] NormalizationError),
}
