//! Row extraction from webhook JSON feeds.
//!
//! Automation backends answer either with a bare array of row objects or with
//! that array wrapped under a conventional key (`{"data": [...]}`,
//! `{"result": {"items": [...]}}`). One level of wrapper nesting is searched.

use serde_json::{Map, Value};

use crate::error::FeedError;
use crate::tabular::{RawRow, Table};
use crate::text::KeyNormalization;

/// Keys under which a row array may be wrapped, in search order.
pub const WRAPPER_KEYS: &[&str] = &[
    "items", "data", "result", "rows", "records", "list", "values", "results",
];

/// Parse a JSON body into a keyed table.
///
/// `origin` only labels error messages.
pub fn parse_json_feed(
    text: &str,
    origin: &str,
    normalization: KeyNormalization,
) -> Result<Table, FeedError> {
    let value: Value = serde_json::from_str(text.trim_start_matches('\u{FEFF}'))?;
    extract_json_rows(&value, normalization)
        .ok_or_else(|| FeedError::decode(origin, "no row array found in JSON body"))
}

/// Find the row array in a decoded body and flatten each object into a row.
///
/// Non-object items are skipped. Returns `None` when the body holds no array
/// at the top level or under a known wrapper key.
pub fn extract_json_rows(value: &Value, normalization: KeyNormalization) -> Option<Table> {
    let items = find_row_array(value)?;
    let mut table = Table::default();

    for item in items {
        let Value::Object(obj) = item else {
            log::debug!("Skipping non-object JSON row: {item}");
            continue;
        };
        let mut row = RawRow::new();
        for (key, value) in obj {
            let Some(text) = cell_text(value) else {
                continue;
            };
            let key = normalization.apply(key);
            if key.is_empty() {
                continue;
            }
            if !table.headers.contains(&key) {
                table.headers.push(key.clone());
            }
            row.insert(key, text);
        }
        table.rows.push(row);
    }

    Some(table)
}

fn find_row_array(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => wrapped_array(map).or_else(|| {
            WRAPPER_KEYS
                .iter()
                .find_map(|key| match get_ignore_case(map, key) {
                    Some(Value::Object(inner)) => wrapped_array(inner),
                    _ => None,
                })
        }),
        _ => None,
    }
}

fn wrapped_array(map: &Map<String, Value>) -> Option<&Vec<Value>> {
    WRAPPER_KEYS
        .iter()
        .find_map(|key| match get_ignore_case(map, key) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        })
}

fn get_ignore_case<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

/// Flatten a JSON value into cell text. Nested objects have no tabular form
/// and are skipped; arrays of scalars become a `|`-separated list.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter(|v| !v.is_array() && !v.is_object())
                .filter_map(cell_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("|"),
        ),
        Value::Object(_) => None,
    }
}

#[cfg(test)]
#[path = "tests/json_tests.rs"]
mod tests;
