//! Benchmark harness that sends a fixed classification prompt to several LLM
//! backends, scores each reply against a labelled dataset and tallies the
//! results per model.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use llm_battle::{
//!     builder::{LLMBuilder, ModelChoice},
//!     contender::Contender,
//!     dataset::load_dataset,
//!     evaluator::SequentialEvaluator,
//!     report::{format_standings, write_csv},
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let model = ModelChoice::Gpt35Turbo;
//! let provider = LLMBuilder::new()
//!     .backend(model.backend())
//!     .model(model.model_id())
//!     .api_key(std::env::var("OPENAI_API_KEY")?)
//!     .build()?;
//!
//! let dataset = load_dataset("data.json")?;
//! let mut evaluator = SequentialEvaluator::new(vec![Contender::new("gpt-3", provider)])
//!     .delay(Duration::from_secs(5));
//! let records = evaluator.run(&dataset, &mut std::io::stdout()).await?;
//!
//! print!("{}", format_standings(&evaluator.standings()));
//! write_csv("output.csv", &records)?;
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod builder;
pub mod chat;
pub mod config;
pub mod contender;
pub mod credentials;
pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod prompt;
pub mod report;
pub mod scorer;

pub use contender::{Answer, Contender, Verdict};
pub use error::LLMError;
pub use scorer::Score;
