use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};

use log_analyzer::app::{RunOutcome, run_pipeline, summary_lines};
use log_analyzer::args::AnalyzerArgs;
use log_analyzer::config::resolve_config;
use log_analyzer::error::AppError;

use crate::system::logger::init_logging;

/// Exit status for any failure other than format drift.
const EXIT_FAILURE: u8 = 1;
/// Exit status when too many lines fail to parse.
const EXIT_FORMAT_DRIFT: u8 = 3;

pub(crate) fn run() -> ExitCode {
    let matches = AnalyzerArgs::command().get_matches_from(std::env::args_os());
    let args = match AnalyzerArgs::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(err) => return fail_early(false, &AppError::from(err)),
    };
    let verbose = args.verbose;
    let no_color = args.no_color;

    let config = match resolve_config(args, &matches) {
        Ok(config) => config,
        Err(err) => return fail_early(no_color, &err),
    };

    if let Err(err) = init_logging(verbose, no_color, config.log_file.as_deref()) {
        fallback_logging(verbose, no_color);
        tracing::warn!(error = %err, "cannot open log file, logging to stderr");
    }

    let summary = config.summary;
    match run_pipeline(&config) {
        Ok(outcome) => {
            report_outcome(&outcome);
            if summary {
                for line in summary_lines(&outcome) {
                    println!("{}", line);
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) if err.is_format_drift() => {
            tracing::error!(error = %err, "log format changed, report not written");
            ExitCode::from(EXIT_FORMAT_DRIFT)
        }
        Err(err) => {
            tracing::error!(error = %err, "analysis failed");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn report_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Rendered(rendered) => tracing::info!(
            report = %rendered.report_path.display(),
            rows = rendered.rows.len(),
            "report written"
        ),
        RunOutcome::AlreadyReported { report_path } => tracing::info!(
            report = %report_path.display(),
            "report already done"
        ),
        RunOutcome::NoInput { log_dir } => tracing::warn!(
            log_dir = %log_dir.display(),
            "no log file to analyze"
        ),
    }
}

fn fallback_logging(verbose: bool, no_color: bool) {
    if let Err(err) = init_logging(verbose, no_color, None) {
        eprintln!("Failed to initialize logging: {}", err);
    }
}

fn fail_early(no_color: bool, err: &AppError) -> ExitCode {
    fallback_logging(false, no_color);
    tracing::error!(error = %err, "cannot start analysis");
    ExitCode::from(EXIT_FAILURE)
}
