use super::{CompletionBackend, LlmError, LlmResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::GeneratorSettings;
use std::time::{Duration, Instant};
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

// Every level is optional: a reply without text is an empty string, not an error.
#[derive(Deserialize, Debug)]
struct RawChatResponse {
    #[serde(default)]
    choices: Option<Vec<RawChoice>>,
    #[serde(default)]
    error: Option<RawApiError>,
}

#[derive(Deserialize, Debug)]
struct RawChoice {
    #[serde(default)]
    message: Option<RawMessage>,
}

#[derive(Deserialize, Debug)]
struct RawMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawApiError {
    #[serde(default)]
    message: String,
}

impl RawChatResponse {
    fn into_text(self) -> String {
        self.choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

/// Chat-completion client for OpenRouter or any OpenAI-compatible endpoint.
///
/// One request per call; a non-success status ends the call with
/// [`LlmError::Status`] and is never retried.
pub struct OpenRouterClient {
    client: reqwest::Client,
    endpoint: String,
    settings: GeneratorSettings,
}

impl OpenRouterClient {
    pub fn new(settings: GeneratorSettings) -> LlmResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let endpoint = format!(
            "{}/chat/completions",
            settings.api_base.trim_end_matches('/')
        );
        Ok(Self {
            client,
            endpoint,
            settings,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterClient {
    async fn complete(&self, system: &str, prompt: &str) -> LlmResult<String> {
        let body = ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };
        debug!(
            "LLM request: model={}, max_tokens={}, temp={}, prompt_len={}",
            body.model,
            body.max_tokens,
            body.temperature,
            prompt.len()
        );

        let start = Instant::now();
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.settings.api_key)
            .header("X-Title", &self.settings.app_title)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        debug!(
            "LLM response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(LlmError::Status { status, body: text });
        }

        let parsed: RawChatResponse = serde_json::from_str(&text)?;
        if let Some(err) = parsed.error {
            return Err(LlmError::Api(err.message));
        }
        Ok(parsed.into_text())
    }
}
