/// Errors raised while fetching, decoding or mapping a feed.
///
/// Fetch and decode failures are recovered inside the source chain (the
/// source just contributes zero records); rejected rows are recovered inside
/// the mapper. Only configuration and I/O errors reach callers directly.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("HTTP request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Could not decode feed from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Row rejected: {0}")]
    Rejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FeedError {
    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Network failure or non-2xx answer.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Status { .. } | Self::Io(_))
    }

    /// Body was fetched but is not a feed we understand.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Json(_))
    }
}
