use std::io;

use thiserror::Error;

/// Error types that can occur when talking to an LLM backend.
///
/// These never escape a [`Contender`](crate::contender::Contender): they are
/// turned into an error answer and scored as unparseable.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Authentication and authorization errors
    #[error("Auth error: {0}")]
    AuthError(String),
    /// Invalid request parameters or builder configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Errors returned by the LLM provider
    #[error("Provider error: {0}")]
    ProviderError(String),
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// The provider answered without any text
    #[error("empty response")]
    EmptyResponse,
}

/// Converts reqwest HTTP errors into LLMErrors
impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        LLMError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LLMError {
    fn from(err: serde_json::Error) -> Self {
        LLMError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

/// Failure to load the labelled dataset. Always fatal for a run.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("error decoding dataset JSON: {message} at line {line} column {column}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Parse {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Failure to export result records. Raised before the output file is touched
/// whenever the records themselves are at fault.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no result records to export")]
    NoRecords,
    #[error("duplicate export column `{0}`")]
    DuplicateColumn(String),
    #[error("record {row} has columns {found:?}, expected {expected:?}")]
    ShapeMismatch {
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("export IO error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config IO error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no contenders configured")]
    NoContenders,
    #[error("duplicate contender name `{0}`")]
    DuplicateContender(String),
}
