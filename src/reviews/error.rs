//! Errors raised while fetching reviews.
//!
//! These never reach the review strip: [`super::ReviewFeed::load`] logs
//! them and degrades to an empty list.

use thiserror::Error;

/// Failures of the review data fetch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewFetchError {
    /// No review API endpoint was configured.
    #[error("review API URL is not configured")]
    NotConfigured,

    /// The configured endpoint is not a valid URL.
    #[error("review API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("failed to configure review HTTP client: {message}")]
    Client {
        /// Builder error detail.
        message: String,
    },

    /// Transport-level failure.
    #[error("network error fetching reviews: {message}")]
    Network {
        /// Transport error detail.
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("review API returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not a recognised review payload.
    #[error("review payload could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },
}
