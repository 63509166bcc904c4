//! Default Gemini config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `GEMINI_API_KEY`      = provider credential (mandatory)
//! - `GEMINI_MODEL`        = model identifier (default `gemini-1.5-pro-latest`)
//! - `GEMINI_URL`          = API base URL (default public Gemini endpoint)
//! - `GEMINI_TIMEOUT_SECS` = optional request timeout (u64 seconds)

use crate::{
    config::gen_ai_config::GenAiConfig,
    error_handler::{GenAiError, env_opt_u64, must_env, validate_http_endpoint},
};

/// Public Gemini API base used when `GEMINI_URL` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

impl GenAiConfig {
    /// Builds a config from the environment.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingVar`](crate::error_handler::ConfigError::MissingVar)
    ///   if `GEMINI_API_KEY` is absent or empty
    /// - [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat)
    ///   if `GEMINI_URL` is set but not http(s)
    /// - [`ConfigError::InvalidNumber`](crate::error_handler::ConfigError::InvalidNumber)
    ///   if `GEMINI_TIMEOUT_SECS` is set but not a valid `u64`
    pub fn from_env() -> Result<Self, GenAiError> {
        let api_key = must_env("GEMINI_API_KEY")?;

        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let endpoint = std::env::var("GEMINI_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        validate_http_endpoint("GEMINI_URL", &endpoint)?;

        let timeout_secs = env_opt_u64("GEMINI_TIMEOUT_SECS")?;

        Ok(GenAiConfig {
            model,
            endpoint,
            api_key,
            timeout_secs,
        })
    }
}
