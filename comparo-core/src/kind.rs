/// The content listings the site renders, each backed by its own ordered
/// list of upstream feeds.
///
/// Comparison pages, the blog and the "top 10" listing are all built from the
/// same record shape; only their sources differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Product comparison pages.
    Products,
    /// Blog articles.
    Posts,
    /// The "top 10" ranking.
    Top,
}

/// All kinds in lookup order. `find_by_slug` searches them in this order.
pub const ALL_KINDS: &[ContentKind] = &[
    ContentKind::Products,
    ContentKind::Posts,
    ContentKind::Top,
];

impl ContentKind {
    /// Canonical short name, also the config section name.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Posts => "posts",
            Self::Top => "top",
        }
    }

    /// Extra names accepted on the command line (lowercase).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Products => &["product", "produits", "produit"],
            Self::Posts => &["post", "blog", "articles", "article"],
            Self::Top => &["top10", "top-10", "classement"],
        }
    }

    /// Fallback slug used when a title slugifies to nothing.
    pub fn fallback_slug(&self) -> &'static str {
        match self {
            Self::Products => "produit",
            Self::Posts => "article",
            Self::Top => "top",
        }
    }

    pub fn all() -> &'static [ContentKind] {
        ALL_KINDS
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Error returned when a string cannot be parsed into a `ContentKind`.
#[derive(Debug, Clone)]
pub struct ContentKindParseError(pub String);

impl std::fmt::Display for ContentKindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown content kind: '{}'", self.0)
    }
}

impl std::error::Error for ContentKindParseError {}

impl std::str::FromStr for ContentKind {
    type Err = ContentKindParseError;

    /// Parse a kind from its short name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &kind in ALL_KINDS {
            if kind.short_name() == lower || kind.aliases().contains(&lower.as_str()) {
                return Ok(kind);
            }
        }
        Err(ContentKindParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/kind_tests.rs"]
mod tests;
