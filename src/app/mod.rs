//! Run coordination: one pass from log discovery to the written report.
mod pipeline;
mod summary;


pub use pipeline::{RenderedReport, RunOutcome, run_pipeline};
pub use summary::summary_lines;
