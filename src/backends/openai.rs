//! OpenAI API client for the Chat Completions endpoint.
//!
//! Only plain text chat is needed by the harness: one system message and one
//! user prompt per request, non-streaming.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::{
    backends::{ensure_success, parse_base_url, parse_json},
    chat::{ChatMessage, ChatProvider, ChatResponse},
    error::LLMError,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo-1106";
/// System message sent ahead of every prompt unless overridden.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant";

/// Configuration for the OpenAI client.
#[derive(Debug)]
pub struct OpenAIConfig {
    /// API key for authentication with OpenAI.
    pub api_key: String,
    /// Base URL the endpoints are joined to.
    pub base_url: Url,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature for response randomness.
    pub temperature: Option<f32>,
    /// System prompt to guide model behavior.
    pub system: String,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// Client for interacting with OpenAI's API.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct OpenAI {
    pub config: Arc<OpenAIConfig>,
    pub client: Client,
}

#[derive(Serialize)]
struct OpenAIChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct OpenAIChatRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAIChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Deserialize, Debug)]
pub struct OpenAIChatResponse {
    choices: Vec<OpenAIChatChoice>,
}

#[derive(Deserialize, Debug)]
struct OpenAIChatChoice {
    message: OpenAIChatMsg,
}

#[derive(Deserialize, Debug)]
struct OpenAIChatMsg {
    content: Option<String>,
}

impl std::fmt::Display for OpenAIChatResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "No response content"),
        }
    }
}

impl ChatResponse for OpenAIChatResponse {
    fn text(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|content| !content.is_empty())
    }
}

impl OpenAI {
    /// Creates a new OpenAI client.
    ///
    /// An empty `api_key` is accepted here and reported as an auth error on
    /// the first request.
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        model: Option<String>,
        temperature: Option<f32>,
        timeout_seconds: Option<u64>,
        system: Option<String>,
    ) -> Result<Self, LLMError> {
        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        let base_url = parse_base_url(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        Ok(Self {
            config: Arc::new(OpenAIConfig {
                api_key: api_key.into(),
                base_url,
                model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                temperature,
                system: system.unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
                timeout_seconds,
            }),
            client: builder.build()?,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl ChatProvider for OpenAI {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, LLMError> {
        if self.config.api_key.is_empty() {
            return Err(LLMError::AuthError("Missing OpenAI API key".to_string()));
        }

        let mut openai_msgs = Vec::with_capacity(messages.len() + 1);
        openai_msgs.push(OpenAIChatMessage {
            role: "system",
            content: &self.config.system,
        });
        openai_msgs.extend(messages.iter().map(|m| OpenAIChatMessage {
            role: m.role.as_str(),
            content: &m.content,
        }));

        let body = OpenAIChatRequest {
            model: &self.config.model,
            messages: openai_msgs,
            temperature: self.config.temperature,
            stream: false,
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("OpenAI request payload: {}", json);
            }
        }

        let url = self
            .config
            .base_url
            .join("chat/completions")
            .map_err(|e| LLMError::HttpError(e.to_string()))?;

        let mut request = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&body);

        if let Some(timeout) = self.config.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let resp = request.send().await?;

        log::debug!("OpenAI HTTP status: {}", resp.status());

        let resp = ensure_success(resp, "OpenAI chat completions").await?;
        let json_resp: OpenAIChatResponse = parse_json(resp, "OpenAI chat completions").await?;

        Ok(Box::new(json_resp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> OpenAIChatResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn text_comes_from_first_choice() {
        let resp = response(
            r#"{"choices":[{"message":{"role":"assistant","content":"3"}},{"message":{"content":"4"}}]}"#,
        );
        assert_eq!(resp.text().as_deref(), Some("3"));
    }

    #[test]
    fn null_or_empty_content_has_no_text() {
        assert_eq!(response(r#"{"choices":[{"message":{"content":null}}]}"#).text(), None);
        assert_eq!(response(r#"{"choices":[{"message":{"content":""}}]}"#).text(), None);
        assert_eq!(response(r#"{"choices":[]}"#).text(), None);
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = OpenAI::new("", Some("http://127.0.0.1:9".into()), None, None, None, None)
            .unwrap();
        let err = client.complete("hello").await.unwrap_err();
        assert!(matches!(err, LLMError::AuthError(_)));
    }

    #[test]
    fn defaults_apply_when_unset() {
        let client = OpenAI::new("key", None, None, None, None, None).unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.config.system, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(client.config.base_url.as_str(), DEFAULT_BASE_URL);
    }
}
