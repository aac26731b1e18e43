//! LLM Client: the single point of entry for all chat-completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the completion API directly.
//! All LLM interactions MUST go through `CompletionService`.
//!
//! One HTTP request per call. No retries.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
pub mod mock;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default model identifier. Overridable only through `OPENAI_MODEL`.
pub const MODEL: &str = "gpt-4.1";
/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.7;
/// Exactly one completion choice is requested.
const CHOICE_COUNT: u32 = 1;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no choices")]
    EmptyChoices,

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// An interface for sending a single user prompt and receiving the completion text.
///
/// `NoteGenerator` depends on this rather than on `LlmClient`, so tests can
/// count calls and inspect prompts without a network.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    n: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// Token accounting, only logged. Compatible backends may omit either count.
#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Extracts the content of the first choice, untouched.
    pub fn into_text(self) -> Result<String, LlmError> {
        let first = self.choices.into_iter().next().ok_or(LlmError::EmptyChoices)?;
        first.message.content.ok_or(LlmError::EmptyContent)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completions client for an OpenAI-compatible endpoint.
/// The API key and model are fixed at construction.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl LlmClient {
    pub fn new(
        api_key: String,
        base_url: &str,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes one call to the completion API and returns the decoded response.
    pub async fn call(&self, prompt: &str) -> Result<ChatCompletionResponse, LlmError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            n: CHOICE_COUNT,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Try to parse error message
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.call(prompt).await?.into_text()
    }
}
