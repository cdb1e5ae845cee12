use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported LLM backend providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LLMBackend {
    OpenAI,
    Google,
}

impl fmt::Display for LLMBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LLMBackend::OpenAI => "openai",
            LLMBackend::Google => "google",
        };
        write!(f, "{name}")
    }
}

/// A benchmarked model, chosen explicitly in configuration.
///
/// Each choice pins a backend and a concrete model id, so selecting a tier
/// never depends on matching fragments of a free-form name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelChoice {
    #[serde(rename = "gemini-pro")]
    GeminiPro,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
}

impl ModelChoice {
    pub fn backend(&self) -> LLMBackend {
        match self {
            ModelChoice::GeminiPro => LLMBackend::Google,
            ModelChoice::Gpt35Turbo | ModelChoice::Gpt4Turbo => LLMBackend::OpenAI,
        }
    }

    /// Model identifier sent to the provider API.
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelChoice::GeminiPro => "gemini-pro",
            ModelChoice::Gpt35Turbo => "gpt-3.5-turbo-1106",
            ModelChoice::Gpt4Turbo => "gpt-4-1106-preview",
        }
    }

    /// Name used on the console and as export column when none is configured.
    pub fn default_name(&self) -> &'static str {
        match self {
            ModelChoice::GeminiPro => "gemini",
            ModelChoice::Gpt35Turbo => "gpt-3",
            ModelChoice::Gpt4Turbo => "gpt-4",
        }
    }
}
