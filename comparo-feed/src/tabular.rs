//! Spreadsheet export parsing.
//!
//! Exports come from different spreadsheet tools and locales: comma or
//! semicolon separated, CRLF or LF line endings, quoted cells spanning several
//! lines, BOMs and non-breaking spaces in the header row. Parsing never fails;
//! malformed input just produces fewer or emptier cells.

use std::collections::HashMap;

use crate::text::KeyNormalization;

const BOM: char = '\u{FEFF}';
const NBSP: char = '\u{00A0}';

/// One data row keyed by normalized header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell. When two columns share a key, the first non-empty
    /// value is kept.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.cells.entry(key.into()) {
            std::collections::hash_map::Entry::Occupied(mut slot) => {
                if slot.get().trim().is_empty() && !value.trim().is_empty() {
                    slot.insert(value);
                }
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// A decoded feed: the normalized header set plus its rows.
///
/// `headers` is kept separately from the rows because publication is decided
/// by whether a column exists at all, not by whether a row has a value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Pick the field delimiter from the header line.
///
/// Counts unquoted commas and semicolons up to the first unquoted line break.
/// Semicolon wins only when strictly more frequent.
pub fn sniff_delimiter(text: &str) -> char {
    let mut in_quotes = false;
    let mut commas = 0usize;
    let mut semicolons = 0usize;

    for c in text.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\n' | '\r' if !in_quotes => break,
            ',' if !in_quotes => commas += 1,
            ';' if !in_quotes => semicolons += 1,
            _ => {}
        }
    }

    if semicolons > commas { ';' } else { ',' }
}

/// Split delimited text into rows of raw cells.
///
/// `""` inside a quoted cell is a literal quote. Delimiters and line breaks
/// inside quotes belong to the cell. Rows made of a single empty cell (blank
/// lines) are dropped.
pub fn parse_table(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            c if c == delimiter => row.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                push_row(&mut rows, std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_row(&mut rows, row);
    }

    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    if row.len() == 1 && row[0].is_empty() {
        return;
    }
    rows.push(row);
}

/// Clean a raw header cell: drop BOMs, treat non-breaking spaces as spaces,
/// collapse whitespace runs and trim.
pub fn clean_header_cell(cell: &str) -> String {
    cell.chars()
        .filter(|&c| c != BOM)
        .map(|c| if c == NBSP { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a whole spreadsheet export into a keyed table.
///
/// The first row is the header. Short rows are padded with empty cells and
/// extra trailing cells are ignored.
pub fn parse_records(text: &str, normalization: KeyNormalization) -> Table {
    let delimiter = sniff_delimiter(text.strip_prefix(BOM).unwrap_or(text));
    let mut rows = parse_table(text, delimiter).into_iter();

    let Some(header_row) = rows.next() else {
        return Table::default();
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalization.apply(&clean_header_cell(cell)))
        .collect();

    let rows = rows
        .map(|cells| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, key)| !key.is_empty())
                .map(|(i, key)| (key.clone(), cells.get(i).cloned().unwrap_or_default()))
                .collect::<RawRow>()
        })
        .collect();

    Table { headers, rows }
}

#[cfg(test)]
#[path = "tests/tabular_tests.rs"]
mod tests;
