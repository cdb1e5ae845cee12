use crate::{chat::ChatProvider, error::LLMError};

#[cfg(feature = "openai")]
use super::super::helpers;
use crate::builder::state::BuilderState;

#[cfg(feature = "openai")]
pub(super) fn build_openai(state: &mut BuilderState) -> Result<Box<dyn ChatProvider>, LLMError> {
    let key = helpers::api_key_or_empty(state);
    let timeout = helpers::timeout_or_default(state);

    let provider = crate::backends::openai::OpenAI::new(
        key,
        state.base_url.take(),
        state.model.take(),
        state.temperature,
        Some(timeout),
        state.system.take(),
    )?;

    Ok(Box::new(provider))
}

#[cfg(not(feature = "openai"))]
pub(super) fn build_openai(_state: &mut BuilderState) -> Result<Box<dyn ChatProvider>, LLMError> {
    Err(LLMError::InvalidRequest(
        "OpenAI feature not enabled".to_string(),
    ))
}
