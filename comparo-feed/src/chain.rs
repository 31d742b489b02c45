//! Ordered fallback across upstream sources.

use crate::fetch::FeedFetcher;
use crate::mapper::FeedRecord;
use crate::pipeline::Pipeline;
use crate::source::FeedSource;
use crate::text::KeyNormalization;

/// Tries each source in order and returns the first non-empty result.
///
/// Fetch and decode failures are logged and demote the source to zero
/// records. When nothing yields, the result is empty; callers render an empty
/// listing rather than an error page.
#[derive(Debug, Clone)]
pub struct SourceChain<F> {
    fetcher: F,
    normalization: KeyNormalization,
}

impl<F: FeedFetcher> SourceChain<F> {
    pub fn new(fetcher: F, normalization: KeyNormalization) -> Self {
        Self {
            fetcher,
            normalization,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run the pipeline against `sources` in order until one yields records.
    ///
    /// Sources are fetched sequentially; a later source is only contacted
    /// when every earlier one failed or came back empty.
    pub async fn collect<R: FeedRecord>(
        &self,
        sources: &[FeedSource],
        fallback_slug: &str,
        include_all: bool,
    ) -> Vec<R> {
        let pipeline = Pipeline::new(self.normalization, fallback_slug).include_all(include_all);

        for source in sources {
            let body = match self.fetcher.fetch(source).await {
                Ok(body) => body,
                Err(e) => {
                    log::warn!("Feed source unavailable, trying next: {e}");
                    continue;
                }
            };

            let records: Vec<R> = match pipeline.run(&body, source.format) {
                Ok(records) => records,
                Err(e) => {
                    log::warn!("Feed source {} unreadable, trying next: {e}", source.url);
                    continue;
                }
            };

            if records.is_empty() {
                log::warn!("Feed source {} yielded no {} records", source.url, R::LABEL);
                continue;
            }

            log::info!("Loaded {} {} records from {}", records.len(), R::LABEL, source.url);
            return records;
        }

        if !sources.is_empty() {
            log::warn!("No feed source yielded {} records", R::LABEL);
        }
        Vec::new()
    }
}
