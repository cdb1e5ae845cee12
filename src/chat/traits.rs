use async_trait::async_trait;

use crate::error::LLMError;

use super::message::ChatMessage;

pub trait ChatResponse: std::fmt::Debug + std::fmt::Display + Send + Sync {
    fn text(&self) -> Option<String>;
}

/// Trait for backends that can answer a chat-style request.
#[async_trait]
pub trait ChatProvider: Sync + Send {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, LLMError>;

    /// Sends a single user prompt and returns the reply text.
    ///
    /// A reply without any text is reported as [`LLMError::EmptyResponse`] so
    /// callers always get either a completion or an error.
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        let req = [ChatMessage::user().content(prompt).build()];
        let response = self.chat(&req).await?;
        response.text().ok_or(LLMError::EmptyResponse)
    }
}
