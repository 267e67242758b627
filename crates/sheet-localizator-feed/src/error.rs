//! Feed error types

use thiserror::Error;

/// Result type for feed operations
pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// Errors that can occur while reading a cell feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a cell feed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Sheet id that cannot be placed in a feed URL
    #[error("Invalid sheet id: '{0}'")]
    InvalidSheetId(String),
}
