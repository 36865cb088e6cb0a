//! Integration tests for the HTTP fetcher

use crate::stub::{StubServer, HISTORICAL_PAGE};
use chrono::NaiveDate;
use coin_snapshot::fetch::{FetchError, HttpFetcher, HttpFetcherConfig, PageFetcher};
use std::time::Duration;

fn fetcher(base_url: &str) -> HttpFetcher {
    HttpFetcher::with_config(HttpFetcherConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn jan_7() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let server = StubServer::start("200 OK", HISTORICAL_PAGE).await;

    let body = fetcher(&server.base_url).fetch(jan_7()).await.unwrap();

    assert_eq!(body, HISTORICAL_PAGE);
    assert_eq!(
        server.request_lines(),
        vec!["GET /historical/20240107/ HTTP/1.1".to_string()]
    );
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let server = StubServer::start("503 Service Unavailable", "maintenance").await;

    let err = fetcher(&server.base_url).fetch(jan_7()).await.unwrap_err();

    match err {
        FetchError::Status { url, status } => {
            assert_eq!(status.as_u16(), 503);
            assert!(url.ends_with("/historical/20240107/"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher(&format!("http://{}", addr))
        .fetch(jan_7())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }));
}
