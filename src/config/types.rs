use std::path::PathBuf;

use serde::Deserialize;

use crate::analysis::RowLimit;

/// On-disk configuration. Only the `[log_analyzer]` section is read.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub log_analyzer: Option<AnalyzerSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzerSection {
    #[serde(rename = "REPORT_SIZE", alias = "report_size")]
    pub report_size: Option<usize>,
    #[serde(rename = "REPORT_DIR", alias = "report_dir")]
    pub report_dir: Option<String>,
    #[serde(rename = "LOG_DIR", alias = "log_dir")]
    pub log_dir: Option<String>,
    #[serde(rename = "LOG_FILE", alias = "log_file")]
    pub log_file: Option<String>,
    #[serde(rename = "TEMPLATE", alias = "template")]
    pub template: Option<String>,
    #[serde(
        rename = "MAX_PARSE_FAILURE_PERCENT",
        alias = "max_parse_failure_percent"
    )]
    pub max_parse_failure_percent: Option<f64>,
    #[serde(rename = "LEGACY_ROW_COUNT", alias = "legacy_row_count")]
    pub legacy_row_count: Option<bool>,
}

/// Settings for one run, fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub report_size: usize,
    pub report_dir: PathBuf,
    pub log_dir: PathBuf,
    /// `None` selects the built-in template.
    pub template: Option<PathBuf>,
    /// `None` logs to stderr.
    pub log_file: Option<PathBuf>,
    pub max_parse_failure_percent: f64,
    pub row_limit: RowLimit,
    pub summary: bool,
}
