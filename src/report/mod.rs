//! Report naming, presence check and rendering.
mod output;
mod template;

pub use output::{report_exists, report_path, write_report};
pub use template::{TABLE_PLACEHOLDER, load_template, render_template};
