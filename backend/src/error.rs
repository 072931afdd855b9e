use crate::llm::LlmError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::models::ErrorResponse;
use thiserror::Error;

pub const GENERATION_FAILED: &str = "Failed to generate character. Please try again.";

/// Everything the generate endpoint can answer with instead of a profile.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", GENERATION_FAILED)]
    Generation(#[from] LlmError),
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Generation(e) => tracing::error!("Error generating character: {}", e),
            ApiError::InvalidBody(e) => tracing::warn!("Rejected generate request: {}", e),
        }
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
