use async_trait::async_trait;
use thiserror::Error;

pub mod openrouter;

pub use openrouter::OpenRouterClient;

pub type LlmResult<T> = Result<T, LlmError>;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Upstream returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Upstream error: {0}")]
    Api(String),
    #[error("Failed to parse upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A chat-completion provider that turns a system instruction and a user
/// prompt into reply text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> LlmResult<String>;
}
