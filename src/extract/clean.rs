//! Text cleanup rules applied to extracted cell text

/// Which change marker wrapped a percent value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeMarker {
    Positive,
    Negative,
}

/// Trimmed label text
pub fn label(raw: &str) -> String {
    raw.trim().to_string()
}

/// Currency amount: leading `$` and thousands separators removed
pub fn amount(raw: &str) -> String {
    raw.trim().trim_start_matches('$').trim().replace(',', "")
}

/// Percent change with its sign restored from the marker
///
/// Strips the leading `<` used for tiny values (`<0.01%`), the trailing `%`
/// and thousands separators. The page renders negative changes without a
/// minus sign and relies on the marker class, so a negative marker prefixes
/// `-` unless the text already has one.
pub fn percent(raw: &str, marker: ChangeMarker) -> String {
    let cleaned = raw
        .trim()
        .trim_start_matches('<')
        .trim_end_matches('%')
        .replace(',', "")
        .trim()
        .to_string();

    match marker {
        ChangeMarker::Negative if !cleaned.is_empty() && !cleaned.starts_with('-') => {
            format!("-{}", cleaned)
        }
        _ => cleaned,
    }
}
