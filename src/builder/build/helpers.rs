use secrecy::ExposeSecret;

use super::super::state::BuilderState;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub(super) fn log_builder_state(state: &BuilderState) {
    log::debug!(
        "Building LLM provider. backend={:?} model={:?} temp={:?} api_key={}",
        state.backend,
        state.model,
        state.temperature,
        if state.api_key.is_some() { "set" } else { "missing" },
    );
}

/// Takes the API key, or an empty string which the provider rejects at call time.
pub(super) fn api_key_or_empty(state: &mut BuilderState) -> String {
    state
        .api_key
        .take()
        .map(|key| key.expose_secret().to_string())
        .unwrap_or_default()
}

pub(super) fn timeout_or_default(state: &BuilderState) -> u64 {
    state.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
}
