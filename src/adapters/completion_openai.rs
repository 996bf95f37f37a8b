use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app::ports::{CompletionPort, CompletionRequest};
use crate::domain::errors::{Result, ToolError};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-5.2";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;
const DEFAULT_MAX_TOKENS: u32 = 2_000;
const ERROR_BODY_PREVIEW_BYTES: usize = 300;

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct OpenAiChatConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub max_tokens: u32,
}

impl OpenAiChatConfig {
    /// Reads configuration from the environment. Only the credential is
    /// required; everything else falls back to a default, including when
    /// the variable is set but blank or unparseable.
    pub fn from_env() -> Result<Self> {
        let api_key = nonempty_env("OPENAI_API_KEY")
            .ok_or_else(|| ToolError::MissingCredential("OPENAI_API_KEY is not set".into()))?;
        Ok(Self {
            api_key,
            base_url: nonempty_env("CALM_CONTENT_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: nonempty_env("CALM_CONTENT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: parse_timeout_ms(std::env::var("CALM_CONTENT_TIMEOUT_MS").ok().as_deref()),
            max_tokens: parse_max_tokens(std::env::var("CALM_CONTENT_MAX_TOKENS").ok().as_deref()),
        })
    }
}

fn nonempty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_timeout_ms(raw: Option<&str>) -> Duration {
    let parsed = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0);
    match parsed {
        Some(ms) => Duration::from_millis(ms),
        None => Duration::from_millis(DEFAULT_TIMEOUT_MS),
    }
}

fn parse_max_tokens(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_MAX_TOKENS)
}

// ── Adapter ───────────────────────────────────────────────────────────────────

/// Completion adapter for OpenAI-compatible chat APIs. One request per
/// call; resilience (retries, user-driven "try again") belongs to the
/// caller.
pub struct OpenAiChatAdapter {
    config: OpenAiChatConfig,
    client: Client,
}

impl OpenAiChatAdapter {
    pub fn new(config: OpenAiChatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ToolError::Upstream(format!("failed to build HTTP client: {}", err)))?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(OpenAiChatConfig::from_env()?)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequestBody<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatRequestMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponseBody {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionPort for OpenAiChatAdapter {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        if self.config.api_key.trim().is_empty() {
            return Err(ToolError::MissingCredential("OPENAI_API_KEY is not set".into()));
        }

        let body = ChatRequestBody {
            model: &self.config.model,
            temperature: request.temperature,
            max_tokens: self.config.max_tokens,
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatRequestMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            response_format: request
                .json_response
                .then_some(ResponseFormat {
                    format_type: "json_object",
                }),
        };

        tracing::debug!(model = %self.config.model, json_response = request.json_response, "sending completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|err| ToolError::Upstream(format!("completion request failed: {}", err)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "completion API returned an error status");
            return Err(ToolError::Upstream(format!(
                "completion API returned {}: {}",
                status,
                truncate(&detail, ERROR_BODY_PREVIEW_BYTES)
            )));
        }

        let parsed: ChatResponseBody = response.json().await.map_err(|err| {
            ToolError::Upstream(format!("completion response body was not valid JSON: {}", err))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ToolError::EmptyResponse)
    }
}

fn truncate(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// ── tests ─────────────────────────────────────────────────────────────────────
