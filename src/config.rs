#[path = "config/types.rs"]
mod types;

#[path = "config/load.rs"]
mod load;

pub use load::{default_config_path, load_config, parse_config, LoadedConfig, LOCAL_CONFIG_FILE};
pub use types::{BattleConfig, ContenderConfig, ExportConfig, LoggingConfig};
