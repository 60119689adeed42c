use clap::Parser;

use crate::analysis::DEFAULT_MAX_PARSE_FAILURE_PERCENT;

use super::defaults::{DEFAULT_LOG_DIR, DEFAULT_REPORT_DIR, DEFAULT_REPORT_SIZE};
use super::parsers::parse_percent;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Ranks the endpoints of the latest rotated nginx access log by total request time and renders an HTML report."
)]
pub struct AnalyzerArgs {
    /// Path to config file (TOML or JSON with a [log_analyzer] section)
    #[arg(long, short, env = "LOG_ANALYZER_CONFIG")]
    pub config: Option<String>,

    /// Directory holding the rotated access logs
    #[arg(long = "log-dir", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: String,

    /// Directory receiving report-YYYYMMDD.html files
    #[arg(long = "report-dir", default_value = DEFAULT_REPORT_DIR)]
    pub report_dir: String,

    /// Number of endpoints kept in the report
    #[arg(long = "report-size", default_value_t = DEFAULT_REPORT_SIZE)]
    pub report_size: usize,

    /// HTML template containing a $table_json placeholder (defaults to the built-in one)
    #[arg(long)]
    pub template: Option<String>,

    /// Write the analyzer's own log to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<String>,

    /// Abort when more than this percentage of lines cannot be parsed
    #[arg(
        long = "max-parse-failure-percent",
        default_value_t = DEFAULT_MAX_PARSE_FAILURE_PERCENT,
        value_parser = parse_percent
    )]
    pub max_parse_failure_percent: f64,

    /// Keep report-size + 1 rows, as reports from earlier releases did
    #[arg(long = "legacy-row-count")]
    pub legacy_row_count: bool,

    /// Print a run summary to stdout
    #[arg(long)]
    pub summary: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
