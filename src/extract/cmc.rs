//! CoinMarketCap historical listing extractor
//!
//! Coupled to the page's marker classes: rows are `tr.cmc-table-row`, each
//! column is a `td` tagged `cmc-table__cell--sort-by__<column>`, and percent
//! changes sit in a `cmc--change-negative` or `cmc--change-positive` div.
//! A class rename upstream breaks extraction.

use super::clean::{self, ChangeMarker};
use super::{Extraction, ExtractionError, Field, FieldSet, MalformedRowPolicy, RowExtractor};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Rows taken from the top of the listing
pub const DEFAULT_ROW_LIMIT: usize = 20;

// Selector::parse only fails on malformed CSS, which these constants are not.
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

static ROW: Lazy<Selector> = Lazy::new(|| selector("tr.cmc-table-row"));
static NAME_CELL: Lazy<Selector> = Lazy::new(|| selector("td.cmc-table__cell--sort-by__name"));
static NAME: Lazy<Selector> = Lazy::new(|| selector("a.cmc-table__column-name--name"));
static SYMBOL: Lazy<Selector> = Lazy::new(|| selector("a.cmc-table__column-name--symbol"));
static MARKET_CAP_CELL: Lazy<Selector> =
    Lazy::new(|| selector("td.cmc-table__cell--sort-by__market-cap"));
static PRICE_CELL: Lazy<Selector> = Lazy::new(|| selector("td.cmc-table__cell--sort-by__price"));
static VOLUME_CELL: Lazy<Selector> =
    Lazy::new(|| selector("td.cmc-table__cell--sort-by__volume-24-h"));
static LINK: Lazy<Selector> = Lazy::new(|| selector("a.cmc-link"));
static CHANGE_1H_CELL: Lazy<Selector> =
    Lazy::new(|| selector("td.cmc-table__cell--sort-by__percent-change-1-h"));
static CHANGE_24H_CELL: Lazy<Selector> =
    Lazy::new(|| selector("td.cmc-table__cell--sort-by__percent-change-24-h"));
static CHANGE_7D_CELL: Lazy<Selector> =
    Lazy::new(|| selector("td.cmc-table__cell--sort-by__percent-change-7-d"));
static NEGATIVE: Lazy<Selector> = Lazy::new(|| selector("div.cmc--change-negative"));
static POSITIVE: Lazy<Selector> = Lazy::new(|| selector("div.cmc--change-positive"));

/// Extracts the top rows of a CoinMarketCap historical snapshot page
#[derive(Debug, Clone)]
pub struct CoinMarketCapExtractor {
    limit: usize,
    policy: MalformedRowPolicy,
}

impl CoinMarketCapExtractor {
    /// Create an extractor taking `limit` rows, clamped to
    /// `1..=DEFAULT_ROW_LIMIT`
    pub fn new(limit: usize, policy: MalformedRowPolicy) -> Self {
        let clamped = limit.clamp(1, DEFAULT_ROW_LIMIT);
        if clamped != limit {
            tracing::warn!(requested = limit, limit = clamped, "Row limit clamped");
        }
        Self {
            limit: clamped,
            policy,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn policy(&self) -> MalformedRowPolicy {
        self.policy
    }
}

impl Default for CoinMarketCapExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_LIMIT, MalformedRowPolicy::default())
    }
}

impl RowExtractor for CoinMarketCapExtractor {
    fn extract(&self, markup: &str) -> Result<Extraction, ExtractionError> {
        let document = Html::parse_document(markup);
        let mut extraction = Extraction {
            rows: Vec::with_capacity(self.limit),
            skipped: Vec::new(),
        };

        for (index, row) in document.select(&ROW).enumerate() {
            if extraction.rows.len() >= self.limit {
                break;
            }

            match extract_row(row, index) {
                Ok(fields) => extraction.rows.push(fields),
                Err(e) => match self.policy {
                    MalformedRowPolicy::Fail => return Err(e),
                    MalformedRowPolicy::Skip => {
                        tracing::warn!(row = index, error = %e, "Skipping malformed row");
                        extraction.skipped.push(e);
                    }
                },
            }
        }

        if extraction.rows.is_empty() {
            tracing::warn!("No listing rows found in snapshot page");
        }

        tracing::debug!(
            rows = extraction.rows.len(),
            skipped = extraction.skipped.len(),
            "Extracted listing rows"
        );

        Ok(extraction)
    }
}

fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

fn text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn extract_row(row: ElementRef<'_>, index: usize) -> Result<FieldSet, ExtractionError> {
    let missing = |field| ExtractionError::MissingField { row: index, field };

    let name_cell = first(row, &NAME_CELL).ok_or_else(|| missing(Field::CoinName))?;
    let coin_name = first(name_cell, &NAME)
        .map(|e| clean::label(&text(e)))
        .ok_or_else(|| missing(Field::CoinName))?;
    let coin_symbol = first(name_cell, &SYMBOL)
        .map(|e| clean::label(&text(e)))
        .ok_or_else(|| missing(Field::CoinSymbol))?;

    let market_cap = first(row, &MARKET_CAP_CELL)
        .map(|e| clean::amount(&text(e)))
        .ok_or_else(|| missing(Field::MarketCap))?;
    let price = first(row, &PRICE_CELL)
        .map(|e| clean::amount(&text(e)))
        .ok_or_else(|| missing(Field::Price))?;
    let volume_24h = first(row, &VOLUME_CELL)
        .and_then(|cell| first(cell, &LINK))
        .map(|e| clean::amount(&text(e)))
        .ok_or_else(|| missing(Field::Volume24h))?;

    let percent_change_1h = percent_change(row, &CHANGE_1H_CELL)
        .ok_or_else(|| missing(Field::PercentChange1h))?;
    let percent_change_24h = percent_change(row, &CHANGE_24H_CELL)
        .ok_or_else(|| missing(Field::PercentChange24h))?;
    let percent_change_7d = percent_change(row, &CHANGE_7D_CELL)
        .ok_or_else(|| missing(Field::PercentChange7d))?;

    tracing::debug!(
        row = index,
        symbol = %coin_symbol,
        name = %coin_name,
        price = %price,
        market_cap = %market_cap,
        volume_24h = %volume_24h,
        change_1h = %percent_change_1h,
        change_24h = %percent_change_24h,
        change_7d = %percent_change_7d,
        "Extracted row"
    );

    Ok(FieldSet {
        coin_name,
        coin_symbol,
        price,
        market_cap,
        volume_24h,
        percent_change_1h,
        percent_change_24h,
        percent_change_7d,
    })
}

/// Negative marker wins when both are present
fn percent_change(row: ElementRef<'_>, cell_selector: &Selector) -> Option<String> {
    let cell = first(row, cell_selector)?;
    if let Some(e) = first(cell, &NEGATIVE) {
        return Some(clean::percent(&text(e), ChangeMarker::Negative));
    }
    first(cell, &POSITIVE).map(|e| clean::percent(&text(e), ChangeMarker::Positive))
}
