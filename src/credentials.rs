//! API key resolution from the process environment.

use secrecy::SecretString;

use crate::builder::LLMBackend;

/// Environment variable holding the API key of `backend`.
pub fn backend_env_key(backend: &LLMBackend) -> &'static str {
    match backend {
        LLMBackend::OpenAI => "OPENAI_API_KEY",
        LLMBackend::Google => "GOOGLE_API_KEY",
    }
}

/// Looks up the key for `backend`, preferring `env_override` when given.
///
/// Unset and empty variables both resolve to `None`; the caller still builds
/// the model and the backend reports the missing key when called.
pub fn resolve_api_key(backend: &LLMBackend, env_override: Option<&str>) -> Option<SecretString> {
    let var = env_override.unwrap_or_else(|| backend_env_key(backend));
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Some(SecretString::new(value)),
        _ => {
            log::warn!("{var} is not set; {backend} models will answer with an error");
            None
        }
    }
}
