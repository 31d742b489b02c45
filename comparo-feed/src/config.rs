//! Feed configuration: which sources back each listing, and how to reach them.
//!
//! The configuration is an explicit value handed to [`Catalog`](crate::Catalog).
//! Loading it from `~/.config/comparo/feeds.toml` is a convenience for the
//! binary; the only environment variable consulted is the API key override.

use std::path::{Path, PathBuf};

use comparo_core::ContentKind;
use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::source::FeedSource;
use crate::text::KeyNormalization;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "COMPARO_API_KEY";

const DEFAULT_API_KEY_HEADER: &str = "x-api-key";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// TOML config file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Key sent to sources marked `auth = true`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub api_key_header: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub header_normalization: KeyNormalization,
    pub products: Vec<FeedSource>,
    pub posts: Vec<FeedSource>,
    pub top: Vec<FeedSource>,
    pub offers: Vec<FeedSource>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("comparo/", env!("CARGO_PKG_VERSION")).to_string(),
            header_normalization: KeyNormalization::default(),
            products: Vec::new(),
            posts: Vec::new(),
            top: Vec::new(),
            offers: Vec::new(),
        }
    }
}

impl FeedConfig {
    /// Parse a config document without touching the environment.
    pub fn from_toml_str(content: &str) -> Result<Self, FeedError> {
        toml::from_str(content)
            .map_err(|e| FeedError::config(format!("Invalid feed config: {e}")))
    }

    /// Load a config file and apply the API key environment override.
    pub fn load(path: &Path) -> Result<Self, FeedError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FeedError::config(format!("Cannot read {}: {e}", path.display()))
        })?;
        Ok(Self::from_toml_str(&content)?.with_env_overrides())
    }

    /// Load from the default location. A missing file yields an empty
    /// configuration (no sources) rather than an error.
    pub fn load_default() -> Result<Self, FeedError> {
        match config_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                log::warn!("No feed config at {}, using empty source lists", path.display());
                Ok(Self::default().with_env_overrides())
            }
            None => Err(FeedError::config("Could not determine config directory")),
        }
    }

    /// Replace the API key with `COMPARO_API_KEY` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(key) = std::env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// Ordered fallback list for a content listing.
    pub fn sources(&self, kind: ContentKind) -> &[FeedSource] {
        match kind {
            ContentKind::Products => &self.products,
            ContentKind::Posts => &self.posts,
            ContentKind::Top => &self.top,
        }
    }

    pub fn offer_sources(&self) -> &[FeedSource] {
        &self.offers
    }

    /// Write the config (API key omitted) to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), FeedError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut persisted = self.clone();
        persisted.api_key = None;
        let toml_str = toml::to_string_pretty(&persisted)
            .map_err(|e| FeedError::config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

/// Return the path to the feed config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("comparo").join("feeds.toml"))
}

/// Where the API key is coming from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Determine where the API key for the config at `path` comes from.
pub fn api_key_source(path: Option<&Path>) -> ApiKeySource {
    if std::env::var(API_KEY_ENV).is_ok_and(|k| !k.trim().is_empty()) {
        return ApiKeySource::EnvVar(API_KEY_ENV);
    }
    let from_file = path
        .and_then(|p| std::fs::read_to_string(p).ok())
        .and_then(|content| FeedConfig::from_toml_str(&content).ok())
        .and_then(|config| config.api_key);
    if from_file.is_some() {
        ApiKeySource::ConfigFile
    } else {
        ApiKeySource::Missing
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
