use serde::{Deserialize, Serialize};

/// An affiliate offer card.
///
/// `slug` cross-links the offer to a `ContentRecord`. Offers are kept in feed
/// order and never deduplicated; several merchants may sell the same product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRecord {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub merchant: Option<String>,
    /// Price exactly as the feed wrote it (currency formatting is a display concern)
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub affiliate_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    pub published: bool,
}

impl OfferRecord {
    /// Whether this offer belongs on the page for `slug`.
    pub fn links_to(&self, slug: &str) -> bool {
        self.slug.as_deref() == Some(slug.trim())
    }
}
