//! Unified error handling for `country-data`.
//!
//! All messages carry the `[Country Data]` prefix to simplify attribution
//! in logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, CountryDataError>;

/// Errors produced by the fetch clients in this crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CountryDataError {
    /// Invalid endpoint (empty or missing http/https scheme).
    #[error("[Country Data] invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Transport/HTTP client error.
    #[error("[Country Data] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider signalled a no-match condition (404 on name lookup).
    /// REST Countries reports "nothing matched" as a failure response, not
    /// as an empty list.
    #[error("[Country Data] no match from {url}")]
    NotFound {
        /// Request URL.
        url: String,
    },

    /// Any other non-successful HTTP status from upstream.
    #[error("[Country Data] unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// Unexpected/invalid JSON response.
    #[error("[Country Data] failed to decode response: {0}")]
    Decode(String),
}
