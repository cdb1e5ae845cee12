use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::BattleConfig;

/// Config file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "llm-battle.toml";

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: BattleConfig,
    /// File the configuration came from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Loads the configuration.
///
/// An explicit path must exist. Otherwise `./llm-battle.toml` and then the
/// per-user file are tried, falling back to defaults.
pub fn load_config(path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let source = match path_override {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(PathBuf::from(LOCAL_CONFIG_FILE)), default_config_path()]
            .into_iter()
            .flatten()
            .find(|candidate| candidate.is_file()),
    };

    let config = match &source {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => {
            let config = BattleConfig::default();
            config.validate()?;
            config
        }
    };

    Ok(LoadedConfig { config, source })
}

pub fn parse_config(contents: &str) -> Result<BattleConfig, ConfigError> {
    let config: BattleConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Per-user configuration file, `~/.config/llm-battle/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("llm-battle").join("config.toml"))
}
