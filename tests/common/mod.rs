#![allow(dead_code)]

use llm_battle::dataset::DatasetRow;

pub fn openai_reply(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub fn gemini_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

pub fn rows(labels: &[(&str, i64)]) -> Vec<DatasetRow> {
    labels
        .iter()
        .map(|(text, answer)| DatasetRow {
            text: text.to_string(),
            answer: *answer,
        })
        .collect()
}
