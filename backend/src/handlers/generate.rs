use crate::AppState;
use crate::error::ApiError;
use crate::prompt::{SYSTEM_PROMPT, build_prompt};
use crate::segmenter::parse_profile;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::models::{CharacterRequest, GeneratedProfile};

pub async fn generate_character(
    State(state): State<AppState>,
    payload: Result<Json<CharacterRequest>, JsonRejection>,
) -> Result<Json<GeneratedProfile>, ApiError> {
    let Json(request) = payload?;
    if request.name.trim().is_empty() {
        tracing::warn!("Generating character with an empty name");
    }

    let prompt = build_prompt(&request);
    let raw = state.completions.complete(SYSTEM_PROMPT, &prompt).await?;
    tracing::debug!("Raw model response: {}", raw);

    Ok(Json(parse_profile(&raw)))
}
