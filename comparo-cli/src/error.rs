use thiserror::Error;

use comparo_feed::FeedError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Feed loading or configuration failed
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// JSON output could not be produced
    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),

    /// No record with the requested slug
    #[error("No published content with slug '{0}'")]
    NotFound(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound(slug.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
