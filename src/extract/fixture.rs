//! Listing-page markup builder for tests

use super::Field;

/// One listing row as the page renders it
#[derive(Debug, Clone)]
pub struct FixtureRow {
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub market_cap: String,
    pub volume: String,
    /// Signed percent changes (1h, 24h, 7d); a leading `-` selects the
    /// negative marker and is dropped from the rendered text
    pub changes: [String; 3],
    /// Element to leave out of the rendered row
    pub missing: Option<Field>,
}

impl FixtureRow {
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            price: "$1,234.56".to_string(),
            market_cap: "$1,000,000".to_string(),
            volume: "$50,000".to_string(),
            changes: ["0.10".to_string(), "-1.50".to_string(), "12.30".to_string()],
            missing: None,
        }
    }

    pub fn price(mut self, price: &str) -> Self {
        self.price = price.to_string();
        self
    }

    pub fn changes(mut self, h1: &str, h24: &str, d7: &str) -> Self {
        self.changes = [h1.to_string(), h24.to_string(), d7.to_string()];
        self
    }

    pub fn without(mut self, field: Field) -> Self {
        self.missing = Some(field);
        self
    }

    fn keep(&self, field: Field) -> bool {
        self.missing != Some(field)
    }

    fn change_cell(&self, field: Field, sort_key: &str, value: &str) -> String {
        let inner = if !self.keep(field) {
            String::new()
        } else if let Some(abs) = value.strip_prefix('-') {
            format!(r#"<div class="cmc--change-negative">{}%</div>"#, abs)
        } else {
            format!(r#"<div class="cmc--change-positive">{}%</div>"#, value)
        };
        format!(
            r#"<td class="cmc-table__cell cmc-table__cell--sortable cmc-table__cell--right cmc-table__cell--sort-by__{}">{}</td>"#,
            sort_key, inner
        )
    }

    pub fn html(&self) -> String {
        let mut out = String::from(r#"<tr class="cmc-table-row" style="display:table-row">"#);
        out.push_str(
            r#"<td class="cmc-table__cell cmc-table__cell--sticky cmc-table__cell--sortable cmc-table__cell--left cmc-table__cell--sort-by__rank"><div>1</div></td>"#,
        );

        out.push_str(
            r#"<td class="cmc-table__cell cmc-table__cell--sticky cmc-table__cell--sortable cmc-table__cell--left cmc-table__cell--sort-by__name"><div class="cmc-table__column-name">"#,
        );
        if self.keep(Field::CoinName) {
            out.push_str(&format!(
                r#"<a class="cmc-table__column-name--name cmc-link" href="/currencies/x/"> {} </a>"#,
                self.name
            ));
        }
        if self.keep(Field::CoinSymbol) {
            out.push_str(&format!(
                r#"<a class="cmc-table__column-name--symbol cmc-link" href="/currencies/x/">{}</a>"#,
                self.symbol
            ));
        }
        out.push_str("</div></td>");

        if self.keep(Field::MarketCap) {
            out.push_str(&format!(
                r#"<td class="cmc-table__cell cmc-table__cell--sortable cmc-table__cell--right cmc-table__cell--sort-by__market-cap"><div class="">{}</div></td>"#,
                self.market_cap
            ));
        }
        if self.keep(Field::Price) {
            out.push_str(&format!(
                r#"<td class="cmc-table__cell cmc-table__cell--sortable cmc-table__cell--right cmc-table__cell--sort-by__price"><a href="/currencies/x/markets/" class="cmc-link">{}</a></td>"#,
                self.price
            ));
        }
        out.push_str(
            r#"<td class="cmc-table__cell cmc-table__cell--sortable cmc-table__cell--right cmc-table__cell--sort-by__volume-24-h">"#,
        );
        if self.keep(Field::Volume24h) {
            out.push_str(&format!(
                r#"<a href="/currencies/x/markets/" class="cmc-link">{}</a>"#,
                self.volume
            ));
        }
        out.push_str("</td>");

        out.push_str(&self.change_cell(Field::PercentChange1h, "percent-change-1-h", &self.changes[0]));
        out.push_str(&self.change_cell(Field::PercentChange24h, "percent-change-24-h", &self.changes[1]));
        out.push_str(&self.change_cell(Field::PercentChange7d, "percent-change-7-d", &self.changes[2]));
        out.push_str("</tr>");
        out
    }
}

/// Wrap rows into a full historical page
pub fn page(rows: &[FixtureRow]) -> String {
    let body: String = rows.iter().map(FixtureRow::html).collect();
    format!(
        r#"<!DOCTYPE html><html><head><title>Historical Snapshot</title></head><body><div class="cmc-table"><table><thead><tr><th>Rank</th><th>Name</th></tr></thead><tbody>{}</tbody></table></div></body></html>"#,
        body
    )
}

/// `count` well-formed rows named `Coin0`/`C0`, `Coin1`/`C1`, ...
pub fn numbered_rows(count: usize) -> Vec<FixtureRow> {
    (0..count)
        .map(|i| FixtureRow::new(&format!("Coin{}", i), &format!("C{}", i)))
        .collect()
}
