//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;

#[cfg(test)]
mod tests;

pub use cli::AnalyzerArgs;
pub use defaults::{
    DEFAULT_CONFIG_FILES, DEFAULT_LOG_DIR, DEFAULT_REPORT_DIR, DEFAULT_REPORT_SIZE,
};
