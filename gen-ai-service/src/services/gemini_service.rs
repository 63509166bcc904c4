//! Lightweight Gemini service for text generation.
//!
//! This module implements a thin client for the Gemini REST API:
//! - `POST {endpoint}/v1beta/models/{model}:generateContent?key={api_key}`
//!   — synchronous, non-streaming text generation
//!
//! It uses the universal configuration [`GenAiConfig`]. The API key travels
//! only in the request query string and is stripped from every logged URL
//! and error message.
//!
//! # Examples
//!
//! ```no_run
//! use gen_ai_service::{GenAiConfig, GeminiService, GenerateText};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = GenAiConfig {
//!     model: "gemini-1.5-pro-latest".into(),
//!     endpoint: "https://generativelanguage.googleapis.com".into(),
//!     api_key: std::env::var("GEMINI_API_KEY")?,
//!     timeout_secs: Some(30),
//! };
//!
//! let svc = GeminiService::new(cfg)?;
//! let text = svc.generate("capital of France").await?;
//! println!("{text}");
//! # Ok(()) }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    GenerateText,
    config::gen_ai_config::GenAiConfig,
    error_handler::{ConfigError, GenAiError, Result, make_snippet},
};

/// Thin client for the Gemini API.
///
/// Initialized with a full [`GenAiConfig`]. Reuses one HTTP client with a
/// configurable timeout across calls.
#[derive(Debug)]
pub struct GeminiService {
    client: reqwest::Client,
    cfg: GenAiConfig,
    // generateContent URL without the `?key=` suffix; safe to log.
    url_generate: String,
}

impl GeminiService {
    /// Creates a new [`GeminiService`] from the given config.
    ///
    /// # Errors
    /// - [`GenAiError::InvalidEndpoint`] if `cfg.endpoint` is empty or not http(s)
    /// - [`GenAiError::Config`] if the API key or model name is empty
    /// - [`GenAiError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: GenAiConfig) -> Result<Self> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(GenAiError::InvalidEndpoint(cfg.endpoint));
        }

        if cfg.api_key.trim().is_empty() {
            return Err(ConfigError::MissingVar("GEMINI_API_KEY").into());
        }
        if cfg.model.trim().is_empty() {
            return Err(ConfigError::InvalidFormat {
                var: "GEMINI_MODEL",
                reason: "model name must not be empty",
            }
            .into());
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_generate = format!("{}/v1beta/models/{}:generateContent", base, cfg.model);

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Performs a **non-streaming** generation request.
    ///
    /// The prompt is forwarded verbatim as a single user content part; no
    /// prior conversation turns are attached. Returns the text of the first
    /// candidate, concatenating its parts.
    ///
    /// # Errors
    /// - [`GenAiError::HttpStatus`] for non-2xx responses
    /// - [`GenAiError::Transport`] for client errors
    /// - [`GenAiError::Decode`] if the response cannot be parsed
    /// - [`GenAiError::EmptyCandidates`] if no candidate text came back
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest::from_prompt(prompt);

        debug!("POST {}", self.url_generate);
        let resp = self
            .client
            .post(&self.url_generate)
            .query(&[("key", self.cfg.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_generate.clone();
            let text = resp.text().await.unwrap_or_default();
            return Err(GenAiError::HttpStatus {
                status,
                url,
                snippet: make_snippet(&text),
            });
        }

        let out: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| GenAiError::Decode(format!("serde error: {e}")))?;

        let text = out
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenAiError::EmptyCandidates);
        }

        Ok(text)
    }
}

impl GenerateText for GeminiService {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send {
        self.generate_content(prompt)
    }
}

/* ==========================
HTTP payloads
========================== */

/// Request body for `generateContent` (non-streaming).
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![PartRef { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<PartRef<'a>>,
}

#[derive(Debug, Serialize)]
struct PartRef<'a> {
    text: &'a str,
}

/// Response body for `generateContent`.
///
/// Minimal shape: the generated text lives in
/// `candidates[0].content.parts[*].text`.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}
