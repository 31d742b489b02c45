//! Editorial content records: product pages, blog posts and top-list entries.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Page body, tagged with the markup it was authored in.
///
/// The rendering side picks its sanitization path from the variant; HTML and
/// Markdown are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Html(String),
    Markdown(String),
    #[default]
    None,
}

impl Body {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Raw body text regardless of markup.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Html(s) | Self::Markdown(s) => Some(s),
            Self::None => None,
        }
    }
}

/// A normalized content record as served to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// URL-safe routing key. Never empty.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub body: Body,
    #[serde(default)]
    pub how_to: Option<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Rating, always finite when present (usually out of 5)
    #[serde(default)]
    pub rating: Option<f64>,
    pub published: bool,
    /// Publication date as written in the feed
    #[serde(default, rename = "dateISO")]
    pub date_iso: Option<String>,
}

impl ContentRecord {
    /// Seconds since the Unix epoch for newest-first ordering.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` (space or `T`) and
    /// the French `DD/MM/YYYY`. Missing or unreadable dates sort as the epoch.
    pub fn sort_timestamp(&self) -> i64 {
        self.date_iso.as_deref().map(parse_timestamp).unwrap_or(0)
    }
}

fn parse_timestamp(raw: &str) -> i64 {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.timestamp();
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return dt.and_utc().timestamp();
        }
    }
    for fmt in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp())
                .unwrap_or(0);
        }
    }
    0
}

/// Sort records newest first. Stable, so undated records keep feed order
/// at the end of the list.
pub fn sort_newest_first(records: &mut [ContentRecord]) {
    records.sort_by_key(|r| std::cmp::Reverse(r.sort_timestamp()));
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
