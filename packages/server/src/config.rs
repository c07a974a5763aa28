use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub llm_model: String,
    pub openai_base_url: Option<String>,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let max_upload_mb: usize = env::var("MAX_UPLOAD_MB")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .context("MAX_UPLOAD_MB must be a valid number")?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: non_blank(env::var("OPENAI_API_KEY").ok()),
            llm_model: non_blank(env::var("LLM_MODEL").ok())
                .unwrap_or_else(|| "gpt-4o-mini".to_string()),
            openai_base_url: non_blank(env::var("OPENAI_BASE_URL").ok()),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        })
    }

    /// Enrichment runs only when an API key is configured.
    pub fn enrichment_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            openai_api_key: None,
            llm_model: "gpt-4o-mini".to_string(),
            openai_base_url: None,
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
