//! Labelled dataset loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// One labelled message: the text to classify and its method id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub text: String,
    pub answer: i64,
}

/// Parses a JSON array of `{"text": .., "answer": ..}` objects.
pub fn parse_dataset(json: &str) -> Result<Vec<DatasetRow>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses the dataset at `path`.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<DatasetRow>, DatasetError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let rows = parse_dataset(&contents)?;
    log::info!("Loaded {} dataset rows from {}", rows.len(), path.display());
    Ok(rows)
}
