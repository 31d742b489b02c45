//! Fetching feed bodies over HTTP or from disk.

use std::future::Future;
use std::path::PathBuf;

use tokio::time::Duration;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::source::{FeedSource, FetchedBody};

/// Retrieves the raw text of a feed source.
///
/// The source chain only needs this one operation, so tests can substitute
/// canned bodies for the network.
pub trait FeedFetcher {
    fn fetch(
        &self,
        source: &FeedSource,
    ) -> impl Future<Output = Result<FetchedBody, FeedError>> + Send;
}

/// HTTP fetcher for webhook endpoints and spreadsheet exports.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    api_key: Option<String>,
    api_key_header: String,
}

impl HttpFetcher {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FeedError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_key_header: config.api_key_header.clone(),
        })
    }
}

impl FeedFetcher for HttpFetcher {
    async fn fetch(&self, source: &FeedSource) -> Result<FetchedBody, FeedError> {
        let mut request = self.http.get(&source.url);
        if source.auth {
            match &self.api_key {
                Some(key) => request = request.header(self.api_key_header.as_str(), key.as_str()),
                None => log::warn!("{} requires an API key but none is configured", source.url),
            }
        }

        let resp = request.send().await.map_err(|e| FeedError::Fetch {
            url: source.url.clone(),
            source: e,
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: source.url.clone(),
                status: status.as_u16(),
            });
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let text = resp.text().await.map_err(|e| FeedError::Fetch {
            url: source.url.clone(),
            source: e,
        })?;

        Ok(FetchedBody {
            origin: source.url.clone(),
            content_type,
            text,
        })
    }
}

/// Reads locally exported spreadsheets and JSON dumps.
///
/// Accepts `file://` URLs and plain paths. The content type is inferred from
/// the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl FileFetcher {
    fn path_of(source: &FeedSource) -> PathBuf {
        PathBuf::from(source.url.strip_prefix("file://").unwrap_or(&source.url))
    }
}

impl FeedFetcher for FileFetcher {
    async fn fetch(&self, source: &FeedSource) -> Result<FetchedBody, FeedError> {
        let path = Self::path_of(source);
        let text = std::fs::read_to_string(&path)?;
        let content_type = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some("application/json"),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Some("text/csv"),
            _ => None,
        };
        Ok(FetchedBody::new(&source.url, content_type, text))
    }
}

/// Sends remote sources over HTTP and everything else to disk.
#[derive(Debug, Clone)]
pub struct RoutingFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl RoutingFetcher {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
            file: FileFetcher,
        })
    }
}

impl FeedFetcher for RoutingFetcher {
    async fn fetch(&self, source: &FeedSource) -> Result<FetchedBody, FeedError> {
        if source.is_remote() {
            self.http.fetch(source).await
        } else {
            self.file.fetch(source).await
        }
    }
}
