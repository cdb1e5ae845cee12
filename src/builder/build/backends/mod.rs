mod google;
mod openai;

use crate::{builder::LLMBackend, chat::ChatProvider, error::LLMError};

use crate::builder::state::BuilderState;

pub(super) fn build_backend(
    state: &mut BuilderState,
    backend: LLMBackend,
) -> Result<Box<dyn ChatProvider>, LLMError> {
    match backend {
        LLMBackend::OpenAI => openai::build_openai(state),
        LLMBackend::Google => google::build_google(state),
    }
}
