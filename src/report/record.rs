use crate::{contender::Verdict, dataset::DatasetRow, scorer::Score};

const ANSWER_COLUMN: &str = "answer";
const TEXT_COLUMN: &str = "text";
const RAW_ANSWER_SUFFIX: &str = "-answer";

/// Score and raw answer of one contender, keyed by its export column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreColumn {
    pub column: String,
    pub score: Score,
    pub answer: String,
}

/// Snapshot of one dataset row and every contender's verdict on it.
///
/// Columns are `answer`, `text`, then one `<name>` score column per
/// contender and one `<name>-answer` column per contender, both in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    answer: i64,
    text: String,
    scores: Vec<ScoreColumn>,
}

impl ResultRecord {
    /// Builds a record from `(contender name, verdict)` pairs in run order.
    pub fn new<'a>(
        row: &DatasetRow,
        verdicts: impl IntoIterator<Item = (&'a str, &'a Verdict)>,
    ) -> Self {
        let scores = verdicts
            .into_iter()
            .map(|(name, verdict)| ScoreColumn {
                column: name.to_string(),
                score: verdict.score,
                answer: verdict.answer.to_string(),
            })
            .collect();
        Self {
            answer: row.answer,
            text: row.text.clone(),
            scores,
        }
    }

    pub fn ground_truth(&self) -> i64 {
        self.answer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scores(&self) -> &[ScoreColumn] {
        &self.scores
    }

    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(2 + self.scores.len() * 2);
        columns.push(ANSWER_COLUMN.to_string());
        columns.push(TEXT_COLUMN.to_string());
        columns.extend(self.scores.iter().map(|s| s.column.clone()));
        columns.extend(
            self.scores
                .iter()
                .map(|s| format!("{}{RAW_ANSWER_SUFFIX}", s.column)),
        );
        columns
    }

    /// Cell values in the same order as [`columns`](Self::columns).
    pub fn values(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(2 + self.scores.len() * 2);
        values.push(self.answer.to_string());
        values.push(self.text.clone());
        values.extend(self.scores.iter().map(|s| s.score.value().to_string()));
        values.extend(self.scores.iter().map(|s| s.answer.clone()));
        values
    }
}
