use super::*;
use crate::error::{AppError, AppResult};
use clap::Parser;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = AnalyzerArgs::try_parse_from(["log-analyzer"])?;
    if args.log_dir != DEFAULT_LOG_DIR || args.report_dir != DEFAULT_REPORT_DIR {
        return Err(AppError::config("Unexpected default directories"));
    }
    if args.report_size != DEFAULT_REPORT_SIZE {
        return Err(AppError::config("Unexpected default report size"));
    }
    if (args.max_parse_failure_percent - 20.0).abs() > f64::EPSILON {
        return Err(AppError::config("Unexpected default threshold"));
    }
    if args.legacy_row_count || args.summary || args.verbose || args.template.is_some() {
        return Err(AppError::config("Unexpected default flags"));
    }
    Ok(())
}

#[test]
fn parse_args_overrides() -> AppResult<()> {
    let args = AnalyzerArgs::try_parse_from([
        "log-analyzer",
        "-c",
        "custom.toml",
        "--log-dir",
        "/var/log/nginx",
        "--report-dir",
        "/srv/reports",
        "--report-size",
        "25",
        "--template",
        "tpl.html",
        "--max-parse-failure-percent",
        "12.5",
        "--legacy-row-count",
        "--summary",
        "-v",
    ])?;
    if args.config.as_deref() != Some("custom.toml") {
        return Err(AppError::config("Unexpected config path"));
    }
    if args.log_dir != "/var/log/nginx" || args.report_dir != "/srv/reports" {
        return Err(AppError::config("Unexpected directories"));
    }
    if args.report_size != 25 || args.template.as_deref() != Some("tpl.html") {
        return Err(AppError::config("Unexpected report options"));
    }
    if (args.max_parse_failure_percent - 12.5).abs() > f64::EPSILON {
        return Err(AppError::config("Unexpected threshold"));
    }
    if !(args.legacy_row_count && args.summary && args.verbose) {
        return Err(AppError::config("Expected flags to be set"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_out_of_range_threshold() -> AppResult<()> {
    for value in ["101", "-1", "abc"] {
        if AnalyzerArgs::try_parse_from([
            "log-analyzer",
            "--max-parse-failure-percent",
            value,
        ])
        .is_ok()
        {
            return Err(AppError::config(format!("Expected {} to be rejected", value)));
        }
    }
    Ok(())
}

#[test]
fn parse_args_rejects_negative_report_size() -> AppResult<()> {
    if AnalyzerArgs::try_parse_from(["log-analyzer", "--report-size", "-3"]).is_ok() {
        return Err(AppError::config("Expected negative report size to be rejected"));
    }
    Ok(())
}
