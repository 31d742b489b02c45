//! Row-to-record mapping.
//!
//! Each target field has an ordered synonym list covering the English and
//! French column names the spreadsheets and webhooks actually use. The first
//! synonym with a value wins; absent fields get field-specific defaults.

use comparo_core::{Body, ContentRecord, OfferRecord};

use crate::error::FeedError;
use crate::resolve::FieldResolver;
use crate::tabular::RawRow;
use crate::text::{parse_decimal, slugify, split_list};

/// Column synonyms, highest priority first.
pub mod synonyms {
    pub const SLUG: &[&str] = &["slug", "url_slug", "urlslug", "permalink", "handle"];
    pub const TITLE: &[&str] = &[
        "title",
        "titre",
        "nom",
        "name",
        "h1",
        "product_name",
        "productname",
        "nom_produit",
    ];
    pub const BRAND: &[&str] = &["brand", "marque"];
    pub const HERO_IMAGE: &[&str] = &[
        "hero",
        "hero_image",
        "heroimage",
        "cover",
        "cover_image",
        "coverimage",
        "image",
        "image_url",
        "couverture",
        "visuel",
        "img",
    ];
    pub const SUBTITLE: &[&str] = &["subtitle", "sous_titre", "sous-titre", "tagline", "accroche"];
    pub const EXCERPT: &[&str] = &[
        "excerpt",
        "extrait",
        "résumé",
        "summary",
        "chapo",
        "description",
    ];
    pub const BODY_HTML: &[&str] = &[
        "body_html",
        "bodyhtml",
        "html",
        "content_html",
        "contenthtml",
        "contenu_html",
    ];
    pub const BODY_MARKDOWN: &[&str] = &[
        "body_markdown",
        "bodymarkdown",
        "markdown",
        "body_md",
        "contenu_markdown",
        "body",
        "contenu",
        "content",
        "corps",
    ];
    pub const HOW_TO: &[&str] = &[
        "how_to",
        "howto",
        "how_to_use",
        "utilisation",
        "mode_d'emploi",
        "conseils",
    ];
    pub const PROS: &[&str] = &["pros", "avantages", "points_forts", "plus"];
    pub const CONS: &[&str] = &["cons", "inconvénients", "points_faibles", "moins"];
    pub const TAGS: &[&str] = &[
        "tags",
        "étiquettes",
        "catégories",
        "categories",
        "keywords",
        "mots_clés",
    ];
    pub const RATING: &[&str] = &[
        "rating",
        "note",
        "note_globale",
        "note_globale_(sur_5)",
        "note_/5",
        "score",
        "stars",
    ];
    pub const DATE: &[&str] = &[
        "date",
        "date_iso",
        "dateiso",
        "published_at",
        "publishedat",
        "publication_date",
        "date_de_publication",
        "updated_at",
        "updatedat",
    ];

    pub const PRODUCT_ID: &[&str] = &["product_id", "productid", "id_produit", "sku", "id"];
    pub const MERCHANT: &[&str] = &[
        "merchant",
        "marchand",
        "boutique",
        "shop",
        "vendor",
        "brand",
        "marque",
    ];
    pub const PRICE: &[&str] = &["price", "prix", "tarif", "amount"];
    pub const AFFILIATE_URL: &[&str] = &[
        "affiliate_url",
        "affiliateurl",
        "lien_affilié",
        "deeplink",
        "link",
        "lien",
        "url",
    ];
    pub const IMAGE_URL: &[&str] = &["image_url", "imageurl", "image", "img", "visuel"];
    pub const OFFER_SLUG: &[&str] = &["slug", "product_slug", "content_slug"];
}

/// Per-pass mapping settings.
#[derive(Debug, Clone, Copy)]
pub struct MapContext<'a> {
    pub resolver: FieldResolver,
    /// Slug used when a title slugifies to nothing
    pub fallback_slug: &'a str,
}

/// A record type the pipeline can build from a feed row.
pub trait FeedRecord: Sized {
    /// Short name for log messages.
    const LABEL: &'static str;

    /// Map one row. Rows without any identity are rejected with
    /// `FeedError::Rejected` and dropped by the caller.
    fn from_row(row: &RawRow, ctx: &MapContext<'_>, published: bool) -> Result<Self, FeedError>;

    fn is_published(&self) -> bool;

    /// Routing or cross-link key, if the record has one.
    fn slug(&self) -> Option<&str>;
}

impl FeedRecord for ContentRecord {
    const LABEL: &'static str = "content";

    fn from_row(row: &RawRow, ctx: &MapContext<'_>, published: bool) -> Result<Self, FeedError> {
        use synonyms::*;
        let r = &ctx.resolver;

        let explicit_slug = r.resolve(row, SLUG);
        let title = r.resolve(row, TITLE);
        if explicit_slug.is_none() && title.is_none() {
            return Err(FeedError::rejected("row has neither slug nor title"));
        }

        let slug = match explicit_slug {
            Some(s) => s.to_string(),
            None => title
                .map(slugify)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| ctx.fallback_slug.to_string()),
        };

        let body = if let Some(html) = r.resolve(row, BODY_HTML) {
            Body::Html(html.to_string())
        } else if let Some(md) = r.resolve(row, BODY_MARKDOWN) {
            Body::Markdown(md.to_string())
        } else {
            Body::None
        };

        let list = |names: &[&str]| r.resolve(row, names).map(split_list).unwrap_or_default();

        Ok(ContentRecord {
            slug,
            title: title.unwrap_or("Untitled").to_string(),
            brand: r.resolve_owned(row, BRAND),
            hero_image: r.resolve_owned(row, HERO_IMAGE),
            subtitle: r.resolve_owned(row, SUBTITLE),
            excerpt: r.resolve_owned(row, EXCERPT),
            body,
            how_to: r.resolve_owned(row, HOW_TO),
            pros: list(PROS),
            cons: list(CONS),
            tags: list(TAGS),
            rating: r.resolve(row, RATING).and_then(parse_decimal),
            published,
            date_iso: r.resolve_owned(row, DATE),
        })
    }

    fn is_published(&self) -> bool {
        self.published
    }

    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

impl FeedRecord for OfferRecord {
    const LABEL: &'static str = "offer";

    fn from_row(row: &RawRow, ctx: &MapContext<'_>, published: bool) -> Result<Self, FeedError> {
        use synonyms::*;
        let r = &ctx.resolver;

        let product_id = r.resolve_owned(row, PRODUCT_ID);
        // Offers without an explicit slug can still link through their product name.
        let slug = r.resolve_owned(row, OFFER_SLUG).or_else(|| {
            r.resolve(row, TITLE)
                .map(slugify)
                .filter(|s| !s.is_empty())
        });
        if product_id.is_none() && slug.is_none() {
            return Err(FeedError::rejected("offer has neither product id nor slug"));
        }

        Ok(OfferRecord {
            product_id,
            merchant: r.resolve_owned(row, MERCHANT),
            price: r.resolve_owned(row, PRICE),
            affiliate_url: r.resolve_owned(row, AFFILIATE_URL),
            image_url: r.resolve_owned(row, IMAGE_URL),
            slug,
            published,
        })
    }

    fn is_published(&self) -> bool {
        self.published
    }

    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

#[cfg(test)]
#[path = "tests/mapper_tests.rs"]
mod tests;
