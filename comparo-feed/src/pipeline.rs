//! Single-body ingestion: decode, map, filter.

use crate::error::FeedError;
use crate::mapper::{FeedRecord, MapContext};
use crate::publication::PublicationPolicy;
use crate::resolve::FieldResolver;
use crate::source::{FetchedBody, SourceFormat, decode_table};
use crate::tabular::Table;
use crate::text::KeyNormalization;

/// Settings for one ingestion pass.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    pub normalization: KeyNormalization,
    pub fallback_slug: &'a str,
    /// Keep unpublished records (diagnostics only)
    pub include_all: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(normalization: KeyNormalization, fallback_slug: &'a str) -> Self {
        Self {
            normalization,
            fallback_slug,
            include_all: false,
        }
    }

    pub fn include_all(mut self, include_all: bool) -> Self {
        self.include_all = include_all;
        self
    }

    /// Decode a body and map it to records.
    ///
    /// Only decoding can fail; rejected rows are logged and skipped.
    pub fn run<R: FeedRecord>(
        &self,
        body: &FetchedBody,
        format: SourceFormat,
    ) -> Result<Vec<R>, FeedError> {
        let table = decode_table(body, format, self.normalization)?;
        Ok(self.map_table(&table, &body.origin))
    }

    /// Map every row of a decoded table, applying the publication policy.
    pub fn map_table<R: FeedRecord>(&self, table: &Table, origin: &str) -> Vec<R> {
        let policy = PublicationPolicy::from_headers(&table.headers, self.normalization);
        let ctx = MapContext {
            resolver: FieldResolver::new(self.normalization),
            fallback_slug: self.fallback_slug,
        };

        let mut records = Vec::with_capacity(table.rows.len());
        let mut rejected = 0usize;
        let mut hidden = 0usize;

        for (index, row) in table.rows.iter().enumerate() {
            let published = policy.is_published(row);
            match R::from_row(row, &ctx, published) {
                Ok(record) if self.include_all || record.is_published() => records.push(record),
                Ok(_) => hidden += 1,
                Err(e) => {
                    rejected += 1;
                    log::debug!("{origin}: skipping {} row {}: {e}", R::LABEL, index + 1);
                }
            }
        }

        if rejected > 0 || hidden > 0 {
            log::debug!(
                "{origin}: {} {} records kept, {rejected} rejected, {hidden} unpublished",
                records.len(),
                R::LABEL,
            );
        }
        records
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
