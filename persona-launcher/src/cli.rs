use clap::Parser;
use shared::models::{DEFAULT_API_BASE, DEFAULT_MODEL, GeneratorSettings};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Character persona generator - HTTP backend")]
pub struct Cli {
    #[arg(long, env = "PERSONA_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,
    #[arg(long, env = "PERSONA_PORT", default_value_t = 8080)]
    pub port: u16,
    /// Static files served for any path the API does not handle
    #[arg(long, env = "PERSONA_DIST_DIR")]
    pub dist_dir: Option<PathBuf>,
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: String,
    #[arg(long, env = "OPENROUTER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    #[arg(long, env = "PERSONA_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
    #[arg(long, default_value_t = 0.8)]
    pub temperature: f32,
    #[arg(long, default_value_t = 2000)]
    pub max_tokens: u32,
}

impl Cli {
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            api_key: self.api_key.clone(),
            api_base: self.api_base.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_key_given() {
        let cli = Cli::try_parse_from(["persona-launcher", "--api-key", "k"]).unwrap();
        let settings = cli.settings();
        assert_eq!(settings.api_key, "k");
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.max_tokens, 2000);
        assert_eq!(cli.port, 8080);
        assert!(cli.dist_dir.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "persona-launcher",
            "--api-key",
            "k",
            "--model",
            "openai/gpt-4o-mini",
            "--temperature",
            "0.2",
            "--port",
            "9000",
        ])
        .unwrap();
        let settings = cli.settings();
        assert_eq!(settings.model, "openai/gpt-4o-mini");
        assert_eq!(settings.temperature, 0.2);
        assert_eq!(cli.port, 9000);
    }
}
