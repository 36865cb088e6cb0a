//! Pipeline wiring

use super::PipelineError;
use crate::config::SourceConfig;
use crate::extract::{CoinMarketCapExtractor, RowExtractor};
use crate::fetch::{FetchError, HttpFetcher, HttpFetcherConfig, PageFetcher};
use crate::normalize::{normalize, SnapshotTable};
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Runs fetch, extraction and normalization for one snapshot date
pub struct SnapshotPipeline {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn RowExtractor>,
}

impl SnapshotPipeline {
    /// Create a pipeline from explicit stages
    pub fn new(fetcher: Arc<dyn PageFetcher>, extractor: Arc<dyn RowExtractor>) -> Self {
        Self { fetcher, extractor }
    }

    /// HTTP fetcher and CoinMarketCap extractor configured from `[source]`
    pub fn from_config(config: &SourceConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::with_config(HttpFetcherConfig {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })?;
        let extractor = CoinMarketCapExtractor::new(config.row_limit, config.malformed_rows);

        Ok(Self::new(Arc::new(fetcher), Arc::new(extractor)))
    }

    /// Fetch the page for `date` and build its table, stamped with the
    /// current time
    pub async fn run(&self, date: NaiveDate) -> Result<SnapshotTable, PipelineError> {
        let markup = self.fetcher.fetch(date).await?;
        let table = self.process(&markup, Utc::now())?;

        tracing::info!(
            date = %date,
            records = table.len(),
            "Snapshot scraped"
        );

        Ok(table)
    }

    /// Extract and normalize already-fetched markup
    pub fn process(
        &self,
        markup: &str,
        observed_at: DateTime<Utc>,
    ) -> Result<SnapshotTable, PipelineError> {
        let extraction = self.extractor.extract(markup)?;
        if !extraction.skipped.is_empty() {
            tracing::warn!(
                skipped = extraction.skipped.len(),
                "Snapshot built without malformed rows"
            );
        }
        Ok(normalize(extraction.rows, observed_at)?)
    }
}
