use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, MODEL};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Fails at startup if `OPENAI_API_KEY` is missing.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch the process env.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'OPENAI_API_KEY' is not set")?;

        let llm_timeout_secs = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if llm_timeout_secs == 0 {
            anyhow::bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            openai_api_key,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| MODEL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

// The API key must never reach the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("llm_timeout", &self.llm_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}
