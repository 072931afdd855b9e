use std::fmt;

pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-v3-base:free";
pub const DEFAULT_APP_TITLE: &str = "Character Persona Generator";

/// Everything the backend needs to reach the completion provider.
#[derive(Clone, PartialEq)]
pub struct GeneratorSettings {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Sent as `X-Title` so the provider can attribute traffic.
    pub app_title: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.8,
            max_tokens: 2000,
            app_title: DEFAULT_APP_TITLE.to_string(),
        }
    }
}

impl fmt::Debug for GeneratorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("GeneratorSettings")
            .field("api_key", &api_key)
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("app_title", &self.app_title)
            .finish()
    }
}
