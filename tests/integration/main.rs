//! Integration tests for coin-snapshot

mod fetch_test;
mod pipeline_test;
mod stub;
