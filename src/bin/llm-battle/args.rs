use std::path::PathBuf;

use clap::Parser;

use llm_battle::config::BattleConfig;

#[derive(Parser, Debug)]
#[command(
    name = "llm-battle",
    version,
    about = "Score several LLMs on a labelled message-classification dataset"
)]
pub struct CliArgs {
    /// Configuration file (TOML)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Dataset JSON file, overrides the configuration
    #[arg(long, short = 'd')]
    pub dataset: Option<PathBuf>,
    /// Write per-row results to this CSV file
    #[arg(long, short = 'o', conflicts_with = "no_export")]
    pub output: Option<PathBuf>,
    /// Do not write the CSV export even if configured
    #[arg(long)]
    pub no_export: bool,
    /// Seconds to wait after each model call
    #[arg(long)]
    pub delay_secs: Option<u64>,
    /// Log level or flexi_logger spec, e.g. `debug` or `llm_battle=trace`
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut BattleConfig) {
        if let Some(dataset) = &self.dataset {
            config.dataset = dataset.clone();
        }
        if let Some(output) = &self.output {
            config.export.enabled = true;
            config.export.path = output.clone();
        }
        if self.no_export {
            config.export.enabled = false;
        }
        if let Some(delay) = self.delay_secs {
            config.delay_seconds = delay;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
