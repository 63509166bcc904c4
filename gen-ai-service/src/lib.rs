//! Thin client for an external generative-model provider (Google Gemini).
//!
//! The crate exposes:
//! - [`config::GenAiConfig`] — env-driven configuration (model, endpoint,
//!   API key, timeout),
//! - [`services::gemini_service::GeminiService`] — a non-streaming
//!   `generateContent` client,
//! - [`GenerateText`] — the seam the HTTP layer and tests program against.

pub mod config;
pub mod error_handler;
pub mod services;
pub mod telemetry;

use std::future::Future;

pub use config::gen_ai_config::GenAiConfig;
pub use error_handler::{GenAiError, Result};
pub use services::gemini_service::GeminiService;

/// Single-shot text generation: one prompt in, one completed text out.
///
/// Implemented by [`GeminiService`]; test code substitutes stub
/// implementations to exercise callers without a live provider.
pub trait GenerateText: Send + Sync {
    /// Generates a completion for `prompt` without streaming.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}
