//! Google Gemini client using the `generateContent` REST endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::{
    backends::{ensure_success, parse_base_url, parse_json},
    chat::{ChatMessage, ChatProvider, ChatResponse, ChatRole},
    error::LLMError,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const DEFAULT_MODEL: &str = "gemini-pro";

/// Configuration for the Gemini client.
#[derive(Debug)]
pub struct GoogleConfig {
    pub api_key: String,
    pub base_url: Url,
    pub model: String,
    pub temperature: Option<f32>,
    pub system: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Client for the Gemini API.
#[derive(Debug, Clone)]
pub struct Google {
    pub config: Arc<GoogleConfig>,
    pub client: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleGenerateRequest<'a> {
    contents: Vec<GoogleContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GoogleInstruction<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GoogleGenerationConfig>,
}

#[derive(Serialize)]
struct GoogleContent<'a> {
    role: &'a str,
    parts: Vec<GooglePartOut<'a>>,
}

#[derive(Serialize)]
struct GoogleInstruction<'a> {
    parts: Vec<GooglePartOut<'a>>,
}

#[derive(Serialize)]
struct GooglePartOut<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GoogleGenerationConfig {
    temperature: f32,
}

/// Response body of `generateContent`.
///
/// `candidates` is absent when the prompt was blocked.
#[derive(Deserialize, Debug)]
pub struct GoogleGenerateResponse {
    #[serde(default)]
    candidates: Vec<GoogleCandidate>,
}

#[derive(Deserialize, Debug)]
struct GoogleCandidate {
    content: Option<GoogleCandidateContent>,
}

#[derive(Deserialize, Debug)]
struct GoogleCandidateContent {
    #[serde(default)]
    parts: Vec<GooglePartIn>,
}

#[derive(Deserialize, Debug)]
struct GooglePartIn {
    text: Option<String>,
}

impl std::fmt::Display for GoogleGenerateResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "No response content"),
        }
    }
}

impl ChatResponse for GoogleGenerateResponse {
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl Google {
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
            config: Arc::new(GoogleConfig {
                api_key: api_key.into(),
                base_url,
                model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                temperature,
                system,
                timeout_seconds,
            }),
            client: builder.build()?,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> Result<Url, LLMError> {
        self.config
            .base_url
            .join(&format!("v1beta/models/{}:generateContent", self.config.model))
            .map_err(|e| LLMError::HttpError(e.to_string()))
    }
}

#[async_trait]
impl ChatProvider for Google {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, LLMError> {
        if self.config.api_key.is_empty() {
            return Err(LLMError::AuthError("Missing Google API key".to_string()));
        }

        let contents = messages
            .iter()
            .map(|m| GoogleContent {
                role: match m.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "model",
                },
                parts: vec![GooglePartOut { text: &m.content }],
            })
            .collect();

        let body = GoogleGenerateRequest {
            contents,
            system_instruction: self.config.system.as_deref().map(|text| GoogleInstruction {
                parts: vec![GooglePartOut { text }],
            }),
            generation_config: self
                .config
                .temperature
                .map(|temperature| GoogleGenerationConfig { temperature }),
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("Google request payload: {}", json);
            }
        }

        let mut request = self
            .client
            .post(self.endpoint()?)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body);

        if let Some(timeout) = self.config.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let resp = request.send().await?;

        log::debug!("Google HTTP status: {}", resp.status());

        let resp = ensure_success(resp, "Google generateContent").await?;
        let json_resp: GoogleGenerateResponse = parse_json(resp, "Google generateContent").await?;

        Ok(Box::new(json_resp))
    }
}
