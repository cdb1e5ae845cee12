#[path = "report/summary.rs"]
mod summary;

#[path = "report/record.rs"]
mod record;

#[path = "report/export.rs"]
mod export;

pub use export::write_csv;
pub use record::{ResultRecord, ScoreColumn};
pub use summary::{format_call_summary, format_standings, preview, Standing, PREVIEW_LEN};
