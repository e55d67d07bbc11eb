//! Error types exposed by the request execution layer.

use thiserror::Error;

/// Errors surfaced while constructing an executor or exchanging a request.
///
/// HTTP status codes are never represented here: a 4xx or 5xx reply is a
/// fully-formed [`super::ApiResponse`] for the caller to inspect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The executor could not be constructed from the resolved settings.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The exchange did not complete at the transport level.
    ///
    /// Covers DNS failure, refused connections, timeouts, and interrupted
    /// reads. Distinct from any HTTP status code.
    #[error("transport failure: {message}")]
    Transport {
        /// Transport-level error detail.
        message: String,
    },
}
