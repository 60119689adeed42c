//! Locating and opening the access log to analyze.
mod reader;
mod select;

pub use reader::{LogLines, open_log};
pub use select::{Compression, SelectedFile, parse_log_name, select_latest};
