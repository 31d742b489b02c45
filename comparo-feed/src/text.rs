//! String normalization shared by the parser, resolver and mappers.
//!
//! Spreadsheet authors write headers and values by hand, in French and
//! English, with accents, stray spaces and inconsistent separators. Every
//! helper here is total: bad input yields `None` or an empty list, never an
//! error.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Values that mark a row as published (compared lower-cased and trimmed).
pub const TRUTHY_TOKENS: &[&str] = &[
    "1",
    "true",
    "yes",
    "y",
    "ok",
    "oui",
    "published",
    "online",
    "live",
    "publié",
    "publie",
];

const BOM: char = '\u{FEFF}';

/// How header keys (and the synonym lists matched against them) are normalized.
///
/// Whichever variant a pipeline uses is applied to both sides of every lookup,
/// so a header always matches its synonym regardless of the variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyNormalization {
    /// Lower-case, accents stripped, whitespace runs to `_`.
    #[default]
    Folded,
    /// Lower-case and whitespace runs to `_` only.
    Simple,
}

impl KeyNormalization {
    pub fn apply(&self, raw: &str) -> String {
        let lower = raw.replace(BOM, "").to_lowercase();
        let base = match self {
            Self::Folded => fold_diacritics(&lower),
            Self::Simple => lower,
        };
        base.split_whitespace().collect::<Vec<_>>().join("_")
    }
}

/// Strip accents: NFD decomposition, then drop combining marks.
pub fn fold_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Convert a title to a URL-safe slug.
///
/// `"Crème Booty #1!"` becomes `"creme-booty-1"`. Returns an empty string when
/// nothing alphanumeric survives; callers pick the fallback.
pub fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_separator = false;

    for c in fold_diacritics(s).chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator && !result.is_empty() {
            result.push('-');
            last_was_separator = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Parse a locale-formatted decimal (`"4,5"`, `"4.5"`, `"1 234,50"`,
/// `"1.234,50"`). Non-finite results are treated as absent.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    // With both separators present, the rightmost one is the decimal mark.
    let normalized = match (compact.rfind(','), compact.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => compact.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => compact.replace(',', ""),
        (Some(_), None) => compact.replace(',', "."),
        _ => compact,
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split a multi-valued cell into trimmed, non-empty items in order.
///
/// Cells using `|` or line breaks split on those (so commas inside an item
/// survive); anything else splits on `,`. Duplicates are kept.
pub fn split_list(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = if raw.contains('|') || raw.contains('\n') {
        raw.split(['|', '\n']).collect()
    } else {
        raw.split(',').collect()
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Whether a cell holds one of the accepted truthy tokens.
pub fn parse_flag(raw: &str) -> bool {
    let value = raw.trim().to_lowercase();
    TRUTHY_TOKENS.contains(&value.as_str())
        || TRUTHY_TOKENS.contains(&fold_diacritics(&value).as_str())
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
