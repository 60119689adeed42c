use std::path::{Path, PathBuf};

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::analysis::RowLimit;
use crate::args::AnalyzerArgs;
use crate::args::parsers::ensure_percent;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{AnalyzerConfig, AnalyzerSection, ConfigFile};

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

/// Applies config file values to CLI arguments that were not given explicitly.
///
/// # Errors
///
/// Returns an error when the file has no `[log_analyzer]` section or a value
/// is out of range.
pub fn apply_config(
    args: &mut AnalyzerArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
    path: &Path,
) -> AppResult<()> {
    let section: &AnalyzerSection = config.log_analyzer.as_ref().ok_or_else(|| {
        AppError::config(ConfigError::MissingSection {
            path: path.to_path_buf(),
        })
    })?;

    if !is_cli(matches, "report_size")
        && let Some(size) = section.report_size
    {
        tracing::debug!(report_size = size, "REPORT_SIZE read from config file");
        args.report_size = size;
    }

    if !is_cli(matches, "report_dir")
        && let Some(dir) = section.report_dir.clone()
    {
        tracing::debug!(report_dir = %dir, "REPORT_DIR read from config file");
        args.report_dir = dir;
    }

    if !is_cli(matches, "log_dir")
        && let Some(dir) = section.log_dir.clone()
    {
        tracing::debug!(log_dir = %dir, "LOG_DIR read from config file");
        args.log_dir = dir;
    }

    if !is_cli(matches, "log_file")
        && let Some(file) = section.log_file.clone()
    {
        args.log_file = Some(file);
    }

    if !is_cli(matches, "template")
        && let Some(template) = section.template.clone()
    {
        args.template = Some(template);
    }

    if !is_cli(matches, "max_parse_failure_percent")
        && let Some(percent) = section.max_parse_failure_percent
    {
        args.max_parse_failure_percent = ensure_percent(percent).map_err(AppError::config)?;
    }

    if !is_cli(matches, "legacy_row_count")
        && let Some(legacy) = section.legacy_row_count
    {
        args.legacy_row_count = legacy;
    }

    Ok(())
}

/// Builds the run configuration: built-in defaults, then the config file,
/// then explicit command-line flags.
///
/// # Errors
///
/// Returns an error when the config file is missing or invalid.
pub fn resolve_config(mut args: AnalyzerArgs, matches: &ArgMatches) -> AppResult<AnalyzerConfig> {
    let (path, file) = super::loader::load_config(args.config.as_deref())?;
    apply_config(&mut args, matches, &file, &path)?;
    Ok(AnalyzerConfig::from(args))
}

impl From<AnalyzerArgs> for AnalyzerConfig {
    fn from(args: AnalyzerArgs) -> Self {
        Self {
            report_size: args.report_size,
            report_dir: PathBuf::from(args.report_dir),
            log_dir: PathBuf::from(args.log_dir),
            template: args.template.map(PathBuf::from),
            log_file: args.log_file.map(PathBuf::from),
            max_parse_failure_percent: args.max_parse_failure_percent,
            row_limit: if args.legacy_row_count {
                RowLimit::Legacy
            } else {
                RowLimit::Exact
            },
            summary: args.summary,
        }
    }
}
