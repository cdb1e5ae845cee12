use std::fmt::Write;

use crate::{contender::Answer, scorer::Score};

/// Maximum length of a text preview, ellipsis included.
pub const PREVIEW_LEN: usize = 20;
const ELLIPSIS: &str = "...";

/// Cumulative score of one contender at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub score: i64,
}

/// Shortens `text` to at most `limit` characters, marking the cut with `...`.
///
/// Limits too small to hold the ellipsis cut the text without marking it.
pub fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    if limit < ELLIPSIS.len() {
        return text.chars().take(limit).collect();
    }
    let keep = limit - ELLIPSIS.len();
    let mut short: String = text.chars().take(keep).collect();
    short.push_str(ELLIPSIS);
    short
}

/// Two-line console summary of one model call.
pub fn format_call_summary(
    name: &str,
    score: Score,
    answer: &Answer,
    ground_truth: i64,
    text: &str,
) -> String {
    format!(
        "{name}: {score}\n    (Answer given:{answer}| ground truth:{ground_truth}| text: {})",
        preview(text, PREVIEW_LEN)
    )
}

/// End-of-run block listing every contender in run order.
pub fn format_standings(standings: &[Standing]) -> String {
    let mut out = String::from("Standings -------\n");
    for standing in standings {
        let _ = writeln!(out, "    {}: {}", standing.name, standing.score);
    }
    out
}
