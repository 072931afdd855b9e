pub mod error;
mod handlers;
pub mod llm;
pub mod prompt;
pub mod segmenter;

use crate::handlers::generate_character;
use crate::llm::{CompletionBackend, LlmResult, OpenRouterClient};
use axum::{
    Router,
    routing::{get, post},
};
use shared::models::GeneratorSettings;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub completions: Arc<dyn CompletionBackend>,
}

/// Mount the API on `router`, talking to the provider described by `settings`.
pub fn init(router: Router<AppState>, settings: GeneratorSettings) -> LlmResult<Router<()>> {
    let model = settings.model.clone();
    let client = OpenRouterClient::new(settings)?;
    tracing::info!("Using model {} at {}", model, client.endpoint());
    Ok(init_with_backend(router, Arc::new(client)))
}

pub fn init_with_backend(
    router: Router<AppState>,
    completions: Arc<dyn CompletionBackend>,
) -> Router<()> {
    let state = AppState { completions };

    router
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/generate", post(generate_character))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
