use std::path::PathBuf;

use crate::analysis::{ReportRow, aggregate, build_report};
use crate::config::AnalyzerConfig;
use crate::discovery::{SelectedFile, open_log, select_latest};
use crate::error::AppResult;
use crate::report::{load_template, render_template, report_exists, report_path, write_report};

/// A report written by this run.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub source: SelectedFile,
    pub report_path: PathBuf,
    pub rows: Vec<ReportRow>,
    pub total_requests: u64,
    pub parse_failures: u64,
    pub parse_failure_rate: f64,
    pub endpoints: usize,
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    Rendered(Box<RenderedReport>),
    /// The latest log already has a report; nothing was parsed.
    AlreadyReported { report_path: PathBuf },
    /// The log directory holds no file following the naming convention.
    NoInput { log_dir: PathBuf },
}

/// Runs the whole analysis once.
///
/// # Errors
///
/// Returns the first error of any stage; no report file is left behind when
/// a stage fails.
pub fn run_pipeline(config: &AnalyzerConfig) -> AppResult<RunOutcome> {
    tracing::info!(log_dir = %config.log_dir.display(), "select log to parse");
    let Some(source) = select_latest(&config.log_dir)? else {
        return Ok(RunOutcome::NoInput {
            log_dir: config.log_dir.clone(),
        });
    };
    tracing::info!(
        file = %source.file_name,
        date = %source.date,
        compression = source.compression.as_str(),
        "selected log"
    );

    tracing::info!("checking reports");
    let date_token = source.date_token();
    let target = report_path(&config.report_dir, &date_token);
    if report_exists(&config.report_dir, &date_token) {
        return Ok(RunOutcome::AlreadyReported {
            report_path: target,
        });
    }

    let template = load_template(config.template.as_deref())?;

    tracing::info!(file = %source.path.display(), "parsing log");
    let result = aggregate(open_log(&source)?, config.max_parse_failure_percent)?;

    tracing::info!(
        endpoints = result.endpoints.len(),
        report_size = config.report_size,
        "building report"
    );
    let rows = build_report(&result, config.report_size, config.row_limit);

    tracing::info!(path = %target.display(), "rendering report");
    let html = render_template(&template, &rows)?;
    write_report(&target, &html)?;

    Ok(RunOutcome::Rendered(Box::new(RenderedReport {
        parse_failure_rate: result.parse_failure_rate(),
        total_requests: result.total_requests,
        parse_failures: result.parse_failures,
        endpoints: result.endpoints.len(),
        source,
        report_path: target,
        rows,
    })))
}
