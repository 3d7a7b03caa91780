//! Page-level error handling
//!
//! Every handler returns `PageResult`; the conversion to an HTTP response
//! lives here. Upstream and rendering failures become a generic 500 and are
//! logged exactly once, missing content becomes a 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Result type alias for page handlers
pub type PageResult<T> = std::result::Result<T, PageError>;

/// Errors a page handler can surface
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The CMS call failed (network, status, or payload shape)
    #[error("CMS request failed: {0}")]
    Cms(#[from] tmdirectus::Error),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(#[from] tera::Error),

    /// No record matched the requested slug
    #[error("No {entity} found for slug {slug:?}")]
    NotFound {
        /// What was looked up ("playlist" or "story")
        entity: &'static str,
        /// The slug from the URL
        slug: String,
    },
}

impl PageError {
    /// Shorthand for a slug lookup miss
    pub fn not_found(entity: &'static str, slug: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            slug: slug.into(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            other => {
                error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
