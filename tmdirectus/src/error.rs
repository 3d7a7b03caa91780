//! Error types for the Directus client

/// Result type alias for Directus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the Directus items API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed (query construction)
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API returned an error status
    #[error("API returned status {status} for collection {collection}")]
    Api {
        /// Collection that was queried
        collection: &'static str,
        /// HTTP status code
        status: u16,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
