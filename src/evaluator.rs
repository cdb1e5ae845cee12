#[path = "evaluator/sequential.rs"]
mod sequential;

pub use sequential::{SequentialEvaluator, DEFAULT_DELAY};
