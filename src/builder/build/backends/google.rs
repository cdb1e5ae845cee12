use crate::{chat::ChatProvider, error::LLMError};

#[cfg(feature = "google")]
use super::super::helpers;
use crate::builder::state::BuilderState;

#[cfg(feature = "google")]
pub(super) fn build_google(state: &mut BuilderState) -> Result<Box<dyn ChatProvider>, LLMError> {
    let api_key = helpers::api_key_or_empty(state);
    let timeout = helpers::timeout_or_default(state);

    let provider = crate::backends::google::Google::new(
        api_key,
        state.base_url.take(),
        state.model.take(),
        state.temperature,
        Some(timeout),
        state.system.take(),
    )?;

    Ok(Box::new(provider))
}

#[cfg(not(feature = "google"))]
pub(super) fn build_google(_state: &mut BuilderState) -> Result<Box<dyn ChatProvider>, LLMError> {
    Err(LLMError::InvalidRequest(
        "Google feature not enabled".to_string(),
    ))
}
