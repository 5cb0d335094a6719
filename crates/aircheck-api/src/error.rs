//! Error taxonomy for play-history API operations.

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Errors returned by play-history API operations.
///
/// Decode and status failures are not retried by this layer; retry policy,
/// if any, belongs to the transport or the calling collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed resource does not exist (HTTP 404 or a null detail body).
    #[error("not found: {url}")]
    NotFound {
        /// Canonical request URL.
        url: Url,
    },

    /// The service answered with an unexpected HTTP status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code received.
        status: StatusCode,
        /// Canonical request URL.
        url: Url,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}")]
    Decode {
        /// Canonical request URL.
        url: Url,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Transport-level failure, propagated unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Whether this error means the addressed resource does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
