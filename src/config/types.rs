use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{builder::ModelChoice, error::ConfigError};

const DEFAULT_DATASET: &str = "data.json";
const DEFAULT_EXPORT_PATH: &str = "output.csv";
const DEFAULT_DELAY_SECONDS: u64 = 5;
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BattleConfig {
    pub dataset: PathBuf,
    pub delay_seconds: u64,
    pub timeout_seconds: u64,
    /// Replaces the built-in classification instruction.
    pub instruction: Option<String>,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
    pub contenders: Vec<ContenderConfig>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            delay_seconds: DEFAULT_DELAY_SECONDS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            instruction: None,
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
            contenders: vec![
                ContenderConfig::new(ModelChoice::GeminiPro),
                ContenderConfig::new(ModelChoice::Gpt35Turbo),
                ContenderConfig::new(ModelChoice::Gpt4Turbo),
            ],
        }
    }
}

impl BattleConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }

    /// Checks that the contender list can drive a run and an export.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contenders.is_empty() {
            return Err(ConfigError::NoContenders);
        }
        let mut seen = HashSet::new();
        for contender in &self.contenders {
            let name = contender.display_name();
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateContender(name.to_string()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file; stderr when unset.
    pub path: Option<String>,
    pub rotate_size: u64,
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContenderConfig {
    pub model: ModelChoice,
    /// Console name and export column; defaults per model.
    #[serde(default)]
    pub name: Option<String>,
    /// Environment variable to read the API key from.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl ContenderConfig {
    pub fn new(model: ModelChoice) -> Self {
        Self {
            model,
            name: None,
            api_key_env: None,
            base_url: None,
            temperature: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.model.default_name())
    }
}
