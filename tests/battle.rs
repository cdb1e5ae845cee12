mod common;

use std::fs;
use std::time::Duration;

use mockito::Matcher;

use llm_battle::{
    builder::{LLMBuilder, ModelChoice},
    contender::Contender,
    dataset::load_dataset,
    error::DatasetError,
    evaluator::SequentialEvaluator,
    report::{format_standings, write_csv},
};

fn contender(name: &str, model: ModelChoice, key: &str, base_url: String) -> Contender {
    let provider = LLMBuilder::new()
        .backend(model.backend())
        .model(model.model_id())
        .api_key(key)
        .base_url(base_url)
        .build()
        .unwrap();
    Contender::new(name, provider)
}

#[tokio::test]
async fn full_run_scores_and_exports() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new_async().await;
    let gemini = server
        .mock("POST", "/v1beta/models/gemini-pro:generateContent")
        .with_status(200)
        .with_body(common::gemini_reply("1"))
        .expect(2)
        .create_async()
        .await;
    let gpt3 = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(
            serde_json::json!({"model": "gpt-3.5-turbo-1106"}),
        ))
        .with_status(200)
        .with_body(common::openai_reply("I think it is news"))
        .expect(2)
        .create_async()
        .await;
    let gpt4 = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(
            serde_json::json!({"model": "gpt-4-1106-preview"}),
        ))
        .with_status(500)
        .with_body("overloaded")
        .expect(2)
        .create_async()
        .await;

    let contenders = vec![
        contender("gemini", ModelChoice::GeminiPro, "g", server.url()),
        contender("gpt-3", ModelChoice::Gpt35Turbo, "o", format!("{}/v1", server.url())),
        contender("gpt-4", ModelChoice::Gpt4Turbo, "o", format!("{}/v1", server.url())),
    ];
    let dataset = common::rows(&[("weekly AI newsletter", 1), ("disk usage alert", 2)]);
    let mut evaluator = SequentialEvaluator::new(contenders).delay(Duration::ZERO);
    let mut console = Vec::new();

    let records = evaluator.run(&dataset, &mut console).await?;

    gemini.assert_async().await;
    gpt3.assert_async().await;
    gpt4.assert_async().await;

    assert_eq!(
        format_standings(&evaluator.standings()),
        "Standings -------\n    gemini: 1\n    gpt-3: -2\n    gpt-4: -2\n"
    );
    assert_eq!(records.len(), dataset.len());

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("output.csv");
    write_csv(&path, &records)?;
    let csv = fs::read_to_string(&path)?;
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("answer,text,gemini,gpt-3,gpt-4,gemini-answer,gpt-3-answer,gpt-4-answer")
    );
    let first = lines.next().unwrap_or_default();
    assert!(first.starts_with("1,weekly AI newsletter,1,-1,-1,1,I think it is news,Error: "));
    assert!(lines.next().unwrap_or_default().starts_with("2,disk usage alert,0,-1,-1,1,"));

    let console = String::from_utf8(console)?;
    assert_eq!(console.matches("ground truth:").count(), 6);
    Ok(())
}

#[test]
fn malformed_dataset_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, r#"[{"text": "hello", "answer": 1"#).unwrap();

    let err = load_dataset(&data).unwrap_err();

    assert!(matches!(err, DatasetError::Parse { .. }));
    assert!(err.to_string().starts_with("error decoding dataset JSON"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
