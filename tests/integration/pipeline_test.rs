//! End-to-end snapshot tests against a local page server

use crate::stub::{StubServer, HISTORICAL_PAGE};
use chrono::NaiveDate;
use coin_snapshot::config::SourceConfig;
use coin_snapshot::dashboard::{DashboardQuery, Timeframe};
use coin_snapshot::extract::{ExtractionError, Field, MalformedRowPolicy};
use coin_snapshot::snapshot::{PipelineError, SnapshotCache, SnapshotPipeline};
use rust_decimal_macros::dec;
use std::sync::Arc;

fn source(base_url: &str) -> SourceConfig {
    SourceConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..SourceConfig::default()
    }
}

fn jan_7() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
}

#[tokio::test]
async fn test_snapshot_from_served_page() {
    let server = StubServer::start("200 OK", HISTORICAL_PAGE).await;
    let pipeline = SnapshotPipeline::from_config(&source(&server.base_url)).unwrap();

    let table = pipeline.run(jan_7()).await.unwrap();

    let symbols: Vec<&str> = table.iter().map(|r| r.coin_symbol.as_str()).collect();
    assert_eq!(symbols, vec!["BTC", "ETH", "USDT", "BNB"]);

    let btc = table.get("BTC").unwrap();
    assert_eq!(btc.coin_name, "Bitcoin");
    assert_eq!(btc.price, dec!(42000.12));
    assert_eq!(btc.market_cap, dec!(823456789012));
    assert_eq!(btc.volume_24h, dec!(21345678901));
    assert_eq!(btc.percent_change_1h, dec!(0.12));
    assert_eq!(btc.percent_change_24h, dec!(-1.05));
    assert_eq!(btc.percent_change_7d, dec!(5.43));

    let usdt = table.get("USDT").unwrap();
    assert_eq!(usdt.price, dec!(1.00));
    assert_eq!(usdt.percent_change_1h, dec!(0.01));

    let bnb = table.get("BNB").unwrap();
    assert_eq!(bnb.percent_change_7d, dec!(-1.20));

    let stamp = table.observed_at().unwrap();
    assert!(table.iter().all(|r| r.observed_at == stamp));
}

#[tokio::test]
async fn test_fail_policy_reports_malformed_row() {
    let server = StubServer::start("200 OK", HISTORICAL_PAGE).await;
    let config = SourceConfig {
        malformed_rows: MalformedRowPolicy::Fail,
        ..source(&server.base_url)
    };
    let pipeline = SnapshotPipeline::from_config(&config).unwrap();

    let err = pipeline.run(jan_7()).await.unwrap_err();

    match err {
        PipelineError::Extraction(ExtractionError::MissingField { row, field }) => {
            assert_eq!(row, 3);
            assert_eq!(field, Field::MarketCap);
        }
        other => panic!("expected extraction error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_row_limit_from_config() {
    let server = StubServer::start("200 OK", HISTORICAL_PAGE).await;
    let config = SourceConfig {
        row_limit: 2,
        ..source(&server.base_url)
    };
    let pipeline = SnapshotPipeline::from_config(&config).unwrap();

    let table = pipeline.run(jan_7()).await.unwrap();

    assert_eq!(table.len(), 2);
    assert!(table.get("USDT").is_none());
}

#[tokio::test]
async fn test_cache_fetches_once_per_date() {
    let server = StubServer::start("200 OK", HISTORICAL_PAGE).await;
    let cache =
        SnapshotCache::new(SnapshotPipeline::from_config(&source(&server.base_url)).unwrap());

    let first = cache.get_or_compute(jan_7()).await.unwrap();
    let second = cache.get_or_compute(jan_7()).await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(server.hits(), 1);

    let next_week = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
    cache.get_or_compute(next_week).await.unwrap();
    assert_eq!(server.hits(), 2);
    assert_eq!(cache.len().await, 2);
}

#[tokio::test]
async fn test_failed_fetch_is_not_cached() {
    let server = StubServer::start("500 Internal Server Error", "").await;
    let cache =
        SnapshotCache::new(SnapshotPipeline::from_config(&source(&server.base_url)).unwrap());

    assert!(matches!(
        cache.get_or_compute(jan_7()).await,
        Err(PipelineError::Fetch(_))
    ));
    assert!(cache.get_or_compute(jan_7()).await.is_err());

    assert_eq!(server.hits(), 2);
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_dashboard_over_served_snapshot() {
    let server = StubServer::start("200 OK", HISTORICAL_PAGE).await;
    let pipeline = SnapshotPipeline::from_config(&source(&server.base_url)).unwrap();
    let table = pipeline.run(jan_7()).await.unwrap();

    let query = DashboardQuery {
        symbols: Some(vec!["eth".to_string(), "BNB".to_string()]),
        top_n: 20,
        timeframe: Timeframe::Week,
        sort_values: true,
    };
    let view = query.apply(&table);

    let shown: Vec<&str> = view.shown.iter().map(|r| r.coin_symbol.as_str()).collect();
    assert_eq!(shown, vec!["ETH", "BNB"]);

    let bars: Vec<(&str, bool)> = view
        .bars
        .iter()
        .map(|b| (b.symbol.as_str(), b.positive))
        .collect();
    assert_eq!(bars, vec![("BNB", false), ("ETH", true)]);
}
