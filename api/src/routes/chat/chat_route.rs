//! POST /chat — forwards a prompt to the generative-model provider.

use std::sync::Arc;

use axum::{Json, extract::State};
use gen_ai_service::GenerateText;
use tracing::{debug, error};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::chat::chat_request::{ChatRequest, ChatResponse},
};

/// Handler: POST /chat
///
/// Stateless: no session or identity is attached, and no prior turns are
/// sent to the provider. Every provider-side failure is logged with its
/// cause and collapsed into one generic error response.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/chat \
///   -H 'content-type: application/json' \
///   -d '{"prompt":"capital of France"}'
/// ```
pub async fn chat<G: GenerateText>(
    State(state): State<Arc<AppState<G>>>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    match state.gen_ai.generate(&body.prompt).await {
        Ok(response) => {
            debug!(chars = response.len(), "provider reply ready");
            Ok(Json(ChatResponse { response }))
        }
        Err(err) => {
            error!("provider call failed: {err}");
            Err(crate::error_handler::AppError::Upstream)
        }
    }
}
