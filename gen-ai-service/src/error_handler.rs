//! Unified error handling for `gen-ai-service`.
//!
//! One top-level [`GenAiError`] for the whole crate, with configuration
//! problems grouped in [`ConfigError`]. Env helpers return the unified
//! [`Result<T>`] alias. All messages carry the `[Gen AI Service]` prefix to
//! simplify attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, GenAiError>;

/// Top-level error for the `gen-ai-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GenAiError {
    /// Configuration/validation errors (startup-time).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid endpoint (empty or missing http/https scheme).
    #[error("[Gen AI Service] invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Underlying HTTP transport error.
    #[error("[Gen AI Service] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status from the provider.
    #[error("[Gen AI Service] unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL (credential query stripped).
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// Unexpected/invalid JSON response.
    #[error("[Gen AI Service] failed to decode response: {0}")]
    Decode(String),

    /// The provider answered without any usable candidate text.
    #[error("[Gen AI Service] provider returned no candidates")]
    EmptyCandidates,
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[Gen AI Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (timeouts and the like).
    #[error("[Gen AI Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g. `GEMINI_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g. `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g. invalid URL scheme).
    #[error("[Gen AI Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g. `GEMINI_URL`).
        var: &'static str,
        /// Explanation (e.g. `must start with http:// or https://`).
        reason: &'static str,
    },
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`ConfigError::MissingVar`] if the variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a
/// valid `u64`.
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u64>().map(Some).map_err(|_| {
            GenAiError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start
/// with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Trims a response body down to a loggable snippet.
pub(crate) fn make_snippet(body: &str) -> String {
    body.chars().take(240).collect()
}
