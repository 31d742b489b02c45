//! Upstream feed descriptions and body decoding.

use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::json::parse_json_feed;
use crate::tabular::{Table, parse_records};
use crate::text::KeyNormalization;

/// How a source's body should be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Decide from the content type and the first character of the body.
    #[default]
    Auto,
    Json,
    Csv,
}

impl std::str::FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown feed format '{other}' (expected auto, json or csv)")),
        }
    }
}

/// One upstream feed in a fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    /// `http(s)://` URL, `file://` URL or local path
    pub url: String,
    /// Send the configured API key header with the request
    #[serde(default)]
    pub auth: bool,
    #[serde(default)]
    pub format: SourceFormat,
}

impl FeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: false,
            format: SourceFormat::Auto,
        }
    }

    pub fn with_auth(mut self, auth: bool) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_format(mut self, format: SourceFormat) -> Self {
        self.format = format;
        self
    }

    pub fn is_remote(&self) -> bool {
        let lower = self.url.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

/// A fetched, already-decoded text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    /// Where the body came from, for log and error messages
    pub origin: String,
    pub content_type: Option<String>,
    pub text: String,
}

impl FetchedBody {
    pub fn new(
        origin: impl Into<String>,
        content_type: Option<&str>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            content_type: content_type.map(String::from),
            text: text.into(),
        }
    }

    fn first_char(&self) -> Option<char> {
        self.text
            .chars()
            .find(|c| !c.is_whitespace() && *c != '\u{FEFF}')
    }

    /// Whether the body should go through the JSON extractor.
    pub fn looks_like_json(&self) -> bool {
        let by_type = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));
        by_type || matches!(self.first_char(), Some('[') | Some('{'))
    }

    /// Error pages and sign-in walls come back as HTML with a 200 status.
    fn looks_like_html(&self) -> bool {
        let by_type = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("text/html"));
        by_type || self.first_char() == Some('<')
    }
}

/// Decode a body into a keyed table according to the source format.
pub fn decode_table(
    body: &FetchedBody,
    format: SourceFormat,
    normalization: KeyNormalization,
) -> Result<Table, FeedError> {
    let json = match format {
        SourceFormat::Json => true,
        SourceFormat::Csv => false,
        SourceFormat::Auto => {
            if body.looks_like_json() {
                true
            } else if body.looks_like_html() {
                return Err(FeedError::decode(
                    &body.origin,
                    "received an HTML page instead of a feed",
                ));
            } else {
                false
            }
        }
    };

    if json {
        parse_json_feed(&body.text, &body.origin, normalization)
    } else {
        Ok(parse_records(&body.text, normalization))
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
