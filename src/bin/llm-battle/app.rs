use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use llm_battle::{
    config::{load_config, BattleConfig},
    contender::Contender,
    dataset::load_dataset,
    error::LLMError,
    evaluator::SequentialEvaluator,
    report::{format_standings, write_csv},
};

use crate::{args::CliArgs, factory::build_contenders, logging::init_logging};

pub async fn run() -> anyhow::Result<()> {
    // API keys may live in a local .env file.
    let dotenv = dotenvy::dotenv();

    let args = CliArgs::parse();
    let loaded = load_config(args.config.as_deref()).context("loading configuration")?;
    let mut config = loaded.config;
    args.apply(&mut config);

    let _logger = init_logging(&config.logging)?;
    match &loaded.source {
        Some(path) => log::info!("Using configuration {}", path.display()),
        None => log::info!("Using built-in configuration"),
    }
    if let Ok(path) = dotenv {
        log::debug!("Loaded environment from {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    battle(&config, &mut out, build_contenders).await
}

/// Loads the dataset, then builds the contenders with `make_contenders` and
/// runs them. A dataset error returns before any model is built.
pub async fn battle<W, F>(
    config: &BattleConfig,
    out: &mut W,
    make_contenders: F,
) -> anyhow::Result<()>
where
    W: Write,
    F: FnOnce(&BattleConfig) -> Result<Vec<Contender>, LLMError>,
{
    let dataset = load_dataset(&config.dataset)
        .with_context(|| format!("loading dataset {}", config.dataset.display()))?;

    let contenders = make_contenders(config).context("building models")?;
    let mut evaluator = SequentialEvaluator::new(contenders)
        .delay(config.delay())
        .collect_records(config.export.enabled);
    if let Some(instruction) = &config.instruction {
        evaluator = evaluator.instruction(instruction.clone());
    }

    let records = evaluator.run(&dataset, out).await?;
    writeln!(out)?;
    write!(out, "{}", format_standings(&evaluator.standings()))?;
    out.flush()?;

    if !config.export.enabled {
        return Ok(());
    }
    if records.is_empty() {
        log::warn!(
            "Dataset {} has no rows, skipping export to {}",
            config.dataset.display(),
            config.export.path.display()
        );
        return Ok(());
    }
    write_csv(&config.export.path, &records)
        .with_context(|| format!("exporting to {}", config.export.path.display()))?;
    Ok(())
}
