use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::{
    chat::{ChatMessage, ChatProvider, ChatResponse},
    error::LLMError,
    scorer::Score,
};

#[derive(Debug)]
struct Reply(String);

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ChatResponse for Reply {
    fn text(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Plays back canned replies and remembers the prompts it saw.
#[derive(Clone, Default)]
struct Scripted {
    replies: Arc<Mutex<VecDeque<Result<String, String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl Scripted {
    fn new(replies: &[Result<&str, &str>]) -> Self {
        let replies = replies
            .iter()
            .map(|r| r.map(str::to_string).map_err(str::to_string))
            .collect();
        Self {
            replies: Arc::new(Mutex::new(replies)),
            prompts: Arc::default(),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for Scripted {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, LLMError> {
        self.prompts
            .lock()
            .unwrap()
            .push(messages[0].content.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(Box::new(Reply(text))),
            Some(Err(msg)) => Err(LLMError::ProviderError(msg)),
            None => Err(LLMError::ProviderError("script exhausted".into())),
        }
    }
}

fn newsletter() -> Vec<DatasetRow> {
    vec![DatasetRow {
        text: "weekly AI newsletter...".into(),
        answer: 1,
    }]
}

fn evaluator(models: Vec<(&str, Scripted)>) -> SequentialEvaluator {
    let contenders = models
        .into_iter()
        .map(|(name, model)| Contender::new(name, Box::new(model)))
        .collect();
    SequentialEvaluator::new(contenders).delay(Duration::ZERO)
}

#[tokio::test]
async fn correct_answer_scores_one() {
    let mut eval = evaluator(vec![("m", Scripted::new(&[Ok("1")]))]);
    let mut out = Vec::new();

    eval.run(&newsletter(), &mut out).await.unwrap();

    let c = &eval.contenders()[0];
    assert_eq!(c.cumulative_score(), 1);
    assert_eq!(c.last().map(|v| v.score), Some(Score::Correct));
}

#[tokio::test]
async fn error_answer_scores_minus_one() {
    let mut eval = evaluator(vec![("m", Scripted::new(&[Ok("Error: timeout")]))]);
    eval.run(&newsletter(), &mut Vec::new()).await.unwrap();
    assert_eq!(eval.contenders()[0].cumulative_score(), -1);
}

#[tokio::test]
async fn backend_failure_scores_minus_one_and_run_continues() {
    let mut eval = evaluator(vec![("m", Scripted::new(&[Err("quota"), Ok("1")]))]);
    let mut rows = newsletter();
    rows.push(rows[0].clone());

    let records = eval.run(&rows, &mut Vec::new()).await.unwrap();

    assert_eq!(eval.contenders()[0].cumulative_score(), 0);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].values()[3], "Error: Provider error: quota");
}

#[tokio::test]
async fn wrong_answer_scores_zero() {
    let mut eval = evaluator(vec![("m", Scripted::new(&[Ok("2")]))]);
    eval.run(&newsletter(), &mut Vec::new()).await.unwrap();
    let c = &eval.contenders()[0];
    assert_eq!(c.cumulative_score(), 0);
    assert_eq!(c.last().map(|v| v.score), Some(Score::Incorrect));
}

#[tokio::test]
async fn failing_model_does_not_affect_others() {
    let good = Scripted::new(&[Ok("1"), Ok("3")]);
    let bad = Scripted::new(&[Err("down"), Err("down")]);
    let rows = vec![
        DatasetRow {
            text: "newsletter".into(),
            answer: 1,
        },
        DatasetRow {
            text: "re: your question".into(),
            answer: 2,
        },
    ];
    let mut eval = evaluator(vec![("good", good), ("bad", bad)]);

    eval.run(&rows, &mut Vec::new()).await.unwrap();

    let standings = eval.standings();
    assert_eq!(standings[0].name, "good");
    assert_eq!(standings[0].score, 1);
    assert_eq!(standings[1].name, "bad");
    assert_eq!(standings[1].score, -2);
}

#[tokio::test]
async fn records_follow_contender_order() {
    let mut eval = evaluator(vec![
        ("gemini", Scripted::new(&[Ok("1")])),
        ("gpt-3", Scripted::new(&[Ok("four")])),
    ]);

    let records = eval.run(&newsletter(), &mut Vec::new()).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].columns(),
        ["answer", "text", "gemini", "gpt-3", "gemini-answer", "gpt-3-answer"]
    );
    assert_eq!(
        records[0].values(),
        ["1", "weekly AI newsletter...", "1", "-1", "1", "four"]
    );
}

#[tokio::test]
async fn disabled_collection_returns_no_records() {
    let mut eval = evaluator(vec![("m", Scripted::new(&[Ok("1")]))]).collect_records(false);
    let records = eval.run(&newsletter(), &mut Vec::new()).await.unwrap();
    assert!(records.is_empty());
    assert_eq!(eval.contenders()[0].cumulative_score(), 1);
}

#[tokio::test]
async fn prompt_is_instruction_plus_text() {
    let model = Scripted::new(&[Ok("1")]);
    let mut eval = evaluator(vec![("m", model.clone())]).instruction("Classify: ");

    eval.run(&newsletter(), &mut Vec::new()).await.unwrap();

    assert_eq!(model.prompts(), ["Classify: weekly AI newsletter..."]);
}

#[tokio::test]
async fn each_call_is_summarised() {
    let mut eval = evaluator(vec![
        ("a", Scripted::new(&[Ok("1")])),
        ("b", Scripted::new(&[Ok("2")])),
    ]);
    let mut out = Vec::new();

    eval.run(&newsletter(), &mut out).await.unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "a: 1\n    (Answer given:1| ground truth:1| text: weekly AI newslet...)\n\
         b: 0\n    (Answer given:2| ground truth:1| text: weekly AI newslet...)\n"
    );
}

#[tokio::test(start_paused = true)]
async fn delay_follows_every_call() {
    let mut eval = evaluator(vec![
        ("a", Scripted::new(&[Ok("1"), Ok("1")])),
        ("b", Scripted::new(&[Ok("1"), Ok("1")])),
    ])
    .delay(Duration::from_secs(5));
    let mut rows = newsletter();
    rows.push(rows[0].clone());

    let start = tokio::time::Instant::now();
    eval.run(&rows, &mut Vec::new()).await.unwrap();

    assert_eq!(start.elapsed(), Duration::from_secs(20));
}

#[tokio::test]
async fn cumulative_score_is_sum_of_row_scores() {
    let replies = [Ok("1"), Ok("2"), Ok("x"), Err("e"), Ok("4")];
    let truths = [1, 1, 3, 2, 4];
    let rows: Vec<_> = truths
        .iter()
        .map(|&answer| DatasetRow {
            text: "t".into(),
            answer,
        })
        .collect();
    let mut eval = evaluator(vec![("m", Scripted::new(&replies))]);

    let records = eval.run(&rows, &mut Vec::new()).await.unwrap();

    let sum: i64 = records
        .iter()
        .map(|r| r.scores()[0].score.value())
        .sum();
    assert_eq!(sum, 1 + 0 - 1 - 1 + 1);
    assert_eq!(eval.contenders()[0].cumulative_score(), sum);
}
