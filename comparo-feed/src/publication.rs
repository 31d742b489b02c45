//! Open-by-default publication filtering.

use crate::tabular::RawRow;
use crate::text::{KeyNormalization, parse_flag};

/// Column names that express publication intent, in priority order.
pub const PUBLICATION_COLUMNS: &[&str] =
    &["published", "publish", "is_published", "status", "state"];

/// Decides which rows are publicly visible.
///
/// A feed without any publication column publishes everything. Once such a
/// column exists, only the accepted truthy tokens publish a row; blank cells
/// and unknown statuses stay hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationPolicy {
    column: Option<String>,
}

impl PublicationPolicy {
    /// Build the policy from the feed's full header set.
    pub fn from_headers(headers: &[String], normalization: KeyNormalization) -> Self {
        let column = PUBLICATION_COLUMNS
            .iter()
            .map(|alias| normalization.apply(alias))
            .find(|key| headers.iter().any(|h| h == key));
        Self { column }
    }

    /// A policy that publishes every row.
    pub fn open() -> Self {
        Self { column: None }
    }

    /// The header driving the decision, if any.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn is_published(&self, row: &RawRow) -> bool {
        match &self.column {
            None => true,
            Some(key) => row.get(key).is_some_and(parse_flag),
        }
    }
}

#[cfg(test)]
#[path = "tests/publication_tests.rs"]
mod tests;
