use gen_ai_service::{GenAiConfig, GeminiService, GenerateText};

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers, generic over the provider so tests
/// can swap in a stub.
pub struct AppState<G: GenerateText> {
    /// The generative-model service every `/chat` call goes through.
    pub gen_ai: G,
}

impl AppState<GeminiService> {
    /// Builds the production state from environment variables
    /// (`GEMINI_API_KEY` and friends; see `gen-ai-service`).
    pub fn from_env() -> Result<Self, AppError> {
        let cfg = GenAiConfig::from_env()?;
        Ok(Self {
            gen_ai: GeminiService::new(cfg)?,
        })
    }
}

impl<G: GenerateText> AppState<G> {
    /// State over an arbitrary provider; used by tests.
    pub fn with_provider(gen_ai: G) -> Self {
        Self { gen_ai }
    }
}
