//! Tri-state scoring of a model answer against the ground-truth label.

use std::fmt;

use crate::contender::Answer;

/// Outcome of one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// The answer parsed and matched the label.
    Correct,
    /// The answer parsed as an integer but named another label.
    Incorrect,
    /// The answer was not a single integer, or the call failed.
    Unparseable,
}

impl Score {
    pub fn value(&self) -> i64 {
        match self {
            Score::Correct => 1,
            Score::Incorrect => 0,
            Score::Unparseable => -1,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Strict integer parse of a whole answer.
///
/// Surrounding whitespace is ignored; anything else that is not exactly one
/// integer (prose, `12abc`, `3.5`, empty text) yields `None`.
pub fn parse_answer(answer: &str) -> Option<i64> {
    answer.trim().parse::<i64>().ok()
}

pub fn score(answer: &str, ground_truth: i64) -> Score {
    match parse_answer(answer) {
        None => Score::Unparseable,
        Some(value) if value == ground_truth => Score::Correct,
        Some(_) => Score::Incorrect,
    }
}

/// Scores an [`Answer`]; failed calls are unparseable by construction.
pub fn score_answer(answer: &Answer, ground_truth: i64) -> Score {
    match answer {
        Answer::Completion(text) => score(text, ground_truth),
        Answer::Error(_) => Score::Unparseable,
    }
}
