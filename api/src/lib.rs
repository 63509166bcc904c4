//! HTTP surface of the chat relay.
//!
//! One route: `POST /chat` forwards a prompt to the generative-model
//! provider and answers with the generated text. Cross-origin access is
//! wide open so any frontend origin can call it.

use std::{env, sync::Arc};

pub mod error_handler;

mod core;
mod middleware_layer;
mod routes;

use axum::{Router, middleware, routing::post};
use gen_ai_service::GenerateText;
use tokio::signal;
use tracing::info;

pub use crate::core::app_state::AppState;
use crate::{
    error_handler::AppError, middleware_layer::cors::permissive_cors,
    routes::chat::chat_route::chat,
};

/// Address used when `RELAY_ADDRESS` is unset.
const DEFAULT_ADDRESS: &str = "0.0.0.0:5000";

/// Builds the relay router over any provider implementation. Tests pass a
/// stub; [`start`] passes the real Gemini service.
pub fn router<G>(state: Arc<AppState<G>>) -> Router
where
    G: GenerateText + 'static,
{
    Router::new()
        .route("/chat", post(chat::<G>))
        .layer(middleware::from_fn(permissive_cors))
        .with_state(state)
}

/// Binds the listener and serves the relay until ctrl-c.
///
/// # Errors
/// Fails on missing/invalid provider configuration, an unbindable address,
/// or a fatal server error. Provider failures during requests are handled
/// per-request, never here.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);

    let addr = env::var("RELAY_ADDRESS").unwrap_or_else(|_| DEFAULT_ADDRESS.into());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;
    info!("chat relay listening on {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Resolves when ctrl-c is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
