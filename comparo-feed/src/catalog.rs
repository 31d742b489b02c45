//! Listing and lookup over the configured feeds.

use std::collections::HashSet;

use comparo_core::{ContentKind, ContentRecord, OfferRecord};

use crate::chain::SourceChain;
use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::fetch::{FeedFetcher, RoutingFetcher};

/// Entry point used by page renderers.
///
/// Every call re-reads the upstream sources; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Catalog<F = RoutingFetcher> {
    config: FeedConfig,
    chain: SourceChain<F>,
}

impl Catalog<RoutingFetcher> {
    /// Build a catalog that reads remote sources over HTTP and local ones from disk.
    pub fn from_config(config: FeedConfig) -> Result<Self, FeedError> {
        let fetcher = RoutingFetcher::new(&config)?;
        Ok(Self::new(config, fetcher))
    }
}

impl<F: FeedFetcher> Catalog<F> {
    pub fn new(config: FeedConfig, fetcher: F) -> Self {
        let chain = SourceChain::new(fetcher, config.header_normalization);
        Self { config, chain }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Content of one kind from the first source that yields any.
    ///
    /// Unpublished rows are dropped unless `include_all` is set. Records
    /// sharing a slug are reduced to the first one seen.
    pub async fn list_content(&self, kind: ContentKind, include_all: bool) -> Vec<ContentRecord> {
        let records = self
            .chain
            .collect(self.config.sources(kind), kind.fallback_slug(), include_all)
            .await;
        dedupe_by_slug(records)
    }

    /// Offers from the first offer source that yields any. Not deduplicated:
    /// several merchants may sell the same product.
    pub async fn list_offers(&self, include_all: bool) -> Vec<OfferRecord> {
        // Offers have no placeholder slug; unlinked offers keep `slug: None`.
        self.chain
            .collect(self.config.offer_sources(), "", include_all)
            .await
    }

    /// Published content of one kind with the given slug.
    pub async fn find_in(&self, kind: ContentKind, slug: &str) -> Option<ContentRecord> {
        let records = self.list_content(kind, false).await;
        find_by_slug(records, slug)
    }

    /// Published content with the given slug, searching products, then posts,
    /// then top lists.
    pub async fn find_by_slug(&self, slug: &str) -> Option<ContentRecord> {
        for &kind in ContentKind::all() {
            if let Some(record) = self.find_in(kind, slug).await {
                return Some(record);
            }
        }
        None
    }

    /// Published offers linked to a content slug, in feed order.
    pub async fn offers_for(&self, slug: &str) -> Vec<OfferRecord> {
        self.list_offers(false)
            .await
            .into_iter()
            .filter(|offer| offer.links_to(slug))
            .collect()
    }
}

/// Drop records whose slug was already seen, keeping feed order.
pub fn dedupe_by_slug(records: Vec<ContentRecord>) -> Vec<ContentRecord> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert(record.slug.clone()) {
            kept.push(record);
        } else {
            log::warn!("Duplicate slug '{}', keeping the first record", record.slug);
        }
    }
    kept
}

/// First record whose slug matches exactly.
pub fn find_by_slug(records: Vec<ContentRecord>, slug: &str) -> Option<ContentRecord> {
    records.into_iter().find(|r| r.slug == slug)
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
