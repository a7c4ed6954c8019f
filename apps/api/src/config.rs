use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Everything has a default so the service boots into stub-tailoring mode
/// with no environment at all; `ANTHROPIC_API_KEY` is only required when
/// `TAILOR_USE_LLM` is enabled.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub tailor_use_llm: bool,
    pub anthropic_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let tailor_use_llm = std::env::var("TAILOR_USE_LLM")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();

        if tailor_use_llm && anthropic_api_key.is_none() {
            anyhow::bail!("TAILOR_USE_LLM is set but ANTHROPIC_API_KEY is missing");
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            tailor_use_llm,
            anthropic_api_key,
        })
    }
}
