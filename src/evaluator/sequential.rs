use std::io::{self, Write};
use std::time::Duration;

use tokio::time::sleep;

use crate::{
    contender::{Contender, Verdict},
    dataset::DatasetRow,
    prompt::{build_prompt, DEFAULT_INSTRUCTION},
    report::{format_call_summary, ResultRecord, Standing},
    scorer::score_answer,
};

/// Pause after every model call unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

/// Runs every dataset row through every contender, one call at a time.
pub struct SequentialEvaluator {
    contenders: Vec<Contender>,
    instruction: String,
    delay: Duration,
    collect_records: bool,
}

impl SequentialEvaluator {
    /// Creates an evaluator; contenders are called in the given order.
    pub fn new(contenders: Vec<Contender>) -> Self {
        Self {
            contenders,
            instruction: DEFAULT_INSTRUCTION.to_string(),
            delay: DEFAULT_DELAY,
            collect_records: true,
        }
    }

    /// Sets the pause applied after each call. `Duration::ZERO` disables it.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets whether [`run`](Self::run) returns one record per row.
    pub fn collect_records(mut self, collect: bool) -> Self {
        self.collect_records = collect;
        self
    }

    /// Replaces the instruction placed before every row text.
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn contenders(&self) -> &[Contender] {
        &self.contenders
    }

    /// Cumulative scores in contender order.
    pub fn standings(&self) -> Vec<Standing> {
        self.contenders
            .iter()
            .map(|c| Standing {
                name: c.name().to_string(),
                score: c.cumulative_score(),
            })
            .collect()
    }

    /// Evaluates `dataset`, writing a summary of each call to `out`.
    ///
    /// Backend failures never stop the run; they are scored -1. Only a
    /// failing write to `out` aborts.
    pub async fn run<W: Write>(
        &mut self,
        dataset: &[DatasetRow],
        out: &mut W,
    ) -> io::Result<Vec<ResultRecord>> {
        let mut records = Vec::new();

        for (idx, row) in dataset.iter().enumerate() {
            log::info!("Evaluating row {}/{}", idx + 1, dataset.len());
            let prompt = build_prompt(&self.instruction, &row.text);
            let mut verdicts = Vec::with_capacity(self.contenders.len());

            for contender in &mut self.contenders {
                let answer = contender.complete(&prompt).await;
                let score = score_answer(&answer, row.answer);
                log::debug!("{} answered {:?} -> {}", contender.name(), answer, score);

                writeln!(
                    out,
                    "{}",
                    format_call_summary(contender.name(), score, &answer, row.answer, &row.text)
                )?;

                let verdict = Verdict { answer, score };
                contender.record(verdict.clone());
                verdicts.push(verdict);

                if !self.delay.is_zero() {
                    sleep(self.delay).await;
                }
            }

            if self.collect_records {
                let names = self.contenders.iter().map(Contender::name);
                records.push(ResultRecord::new(row, names.zip(verdicts.iter())));
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
