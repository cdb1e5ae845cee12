//! HTTP clients for the benchmarked providers.

#[cfg(feature = "google")]
pub mod google;

#[cfg(feature = "openai")]
pub mod openai;

use reqwest::{Response, StatusCode, Url};

use crate::error::LLMError;

/// Parses a base URL, making sure relative endpoints are joined below it.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, LLMError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized)
        .map_err(|e| LLMError::InvalidRequest(format!("invalid base URL `{raw}`: {e}")))
}

/// Turns a non-2xx response into an error carrying the body for diagnostics.
pub(crate) async fn ensure_success(response: Response, context: &str) -> Result<Response, LLMError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::debug!("{context} failed with {status}: {body}");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(LLMError::AuthError(format!("{context} returned {status}")))
        }
        _ => Err(LLMError::ProviderError(format!(
            "{context} returned {status}: {body}"
        ))),
    }
}

/// Decodes a JSON body, keeping the raw text when it does not match `T`.
pub(crate) async fn parse_json<T: serde::de::DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<T, LLMError> {
    let raw = response.text().await?;
    serde_json::from_str(&raw).map_err(|e| LLMError::ResponseFormatError {
        message: format!("{context}: {e}"),
        raw_response: raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = parse_base_url("http://localhost:1234/v1").unwrap();
        assert_eq!(
            url.join("chat/completions").unwrap().as_str(),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            parse_base_url("::nope"),
            Err(LLMError::InvalidRequest(_))
        ));
    }
}
