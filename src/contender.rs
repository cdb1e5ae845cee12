//! A benchmarked model together with its running tally.

use std::fmt;

use crate::{chat::ChatProvider, error::LLMError, scorer::Score};

/// What a model produced for one prompt.
///
/// Failed calls are kept as values so they can be printed, exported and
/// scored like any other answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Completion(String),
    /// Backend failure with its diagnostic, possibly empty.
    Error(String),
}

impl Answer {
    pub fn is_error(&self) -> bool {
        matches!(self, Answer::Error(_))
    }
}

impl From<Result<String, LLMError>> for Answer {
    fn from(result: Result<String, LLMError>) -> Self {
        match result {
            Ok(text) => Answer::Completion(text),
            Err(LLMError::EmptyResponse) => Answer::Error(String::new()),
            Err(err) => Answer::Error(err.to_string()),
        }
    }
}

/// Completions render verbatim; failures render as the `Error` sentinel.
impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Completion(text) => write!(f, "{text}"),
            Answer::Error(diag) if diag.is_empty() => write!(f, "Error"),
            Answer::Error(diag) => write!(f, "Error: {diag}"),
        }
    }
}

/// The scored answer of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub answer: Answer,
    pub score: Score,
}

/// A named model plus its cumulative score for the current run.
pub struct Contender {
    name: String,
    model: Box<dyn ChatProvider>,
    cumulative_score: i64,
    last: Option<Verdict>,
}

impl fmt::Debug for Contender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contender")
            .field("name", &self.name)
            .field("cumulative_score", &self.cumulative_score)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

impl Contender {
    pub fn new(name: impl Into<String>, model: Box<dyn ChatProvider>) -> Self {
        Self {
            name: name.into(),
            model,
            cumulative_score: 0,
            last: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cumulative_score(&self) -> i64 {
        self.cumulative_score
    }

    /// Verdict of the most recent call, if any.
    pub fn last(&self) -> Option<&Verdict> {
        self.last.as_ref()
    }

    /// Asks the model; backend errors come back as [`Answer::Error`].
    pub async fn complete(&self, prompt: &str) -> Answer {
        let result = self.model.complete(prompt).await;
        if let Err(err) = &result {
            log::warn!("{} failed to answer: {err}", self.name);
        }
        Answer::from(result)
    }

    pub fn record(&mut self, verdict: Verdict) {
        self.cumulative_score += verdict.score.value();
        self.last = Some(verdict);
    }
}
