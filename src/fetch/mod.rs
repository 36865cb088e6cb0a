//! Page fetching
//!
//! Retrieves the raw markup of one historical snapshot page

mod http;

pub use http::{historical_url, HttpFetcher, HttpFetcherConfig, DEFAULT_BASE_URL};

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while fetching a snapshot page
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Connection, TLS, timeout or body read failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// Server answered with a non-success status
    #[error("request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Trait for snapshot page sources
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the markup of the snapshot page for `date`
    async fn fetch(&self, date: NaiveDate) -> Result<String, FetchError>;
}
