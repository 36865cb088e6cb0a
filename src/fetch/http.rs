//! HTTP fetcher for CoinMarketCap historical pages
//!
//! Issues a single GET per call. There is no retry; the only hardening is a
//! bounded request timeout.

use super::{FetchError, PageFetcher};
use crate::snapshot::date::url_segment;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;

/// Historical listing provider
pub const DEFAULT_BASE_URL: &str = "https://coinmarketcap.com";

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Scheme and host of the provider, without trailing slash
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Build `<base>/historical/<YYYYMMDD>/`
pub fn historical_url(base_url: &str, date: NaiveDate) -> String {
    format!(
        "{}/historical/{}/",
        base_url.trim_end_matches('/'),
        url_segment(date)
    )
}

/// Fetches snapshot pages over HTTP
pub struct HttpFetcher {
    config: HttpFetcherConfig,
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with custom configuration
    pub fn with_config(config: HttpFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { config, client })
    }

    /// URL that will be requested for `date`
    pub fn url_for(&self, date: NaiveDate) -> String {
        historical_url(&self.config.base_url, date)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, date: NaiveDate) -> Result<String, FetchError> {
        let url = self.url_for(date);

        tracing::debug!(url = %url, "Fetching historical snapshot page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        tracing::info!(url = %url, bytes = body.len(), "Fetched historical snapshot page");

        Ok(body)
    }
}
