use super::pipeline::RunOutcome;

/// Rows echoed in the summary; the full table lives in the report.
const SUMMARY_TOP_ROWS: usize = 5;

/// Human-readable lines describing how a run ended.
#[must_use]
pub fn summary_lines(outcome: &RunOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    match outcome {
        RunOutcome::NoInput { log_dir } => {
            lines.push("Summary:".to_owned());
            lines.push(format!("log_dir: {}", log_dir.display()));
            lines.push("result: no log file to analyze".to_owned());
        }
        RunOutcome::AlreadyReported { report_path } => {
            lines.push("Summary:".to_owned());
            lines.push(format!("report: {}", report_path.display()));
            lines.push("result: report already exists, skipped".to_owned());
        }
        RunOutcome::Rendered(rendered) => {
            lines.push("Summary:".to_owned());
            lines.push(format!("log: {}", rendered.source.path.display()));
            lines.push(format!("log_date: {}", rendered.source.date));
            lines.push(format!(
                "compression: {}",
                rendered.source.compression.as_str()
            ));
            lines.push(format!("lines: {}", rendered.total_requests));
            lines.push(format!(
                "parse_failures: {} ({}%)",
                rendered.parse_failures, rendered.parse_failure_rate
            ));
            lines.push(format!("endpoints: {}", rendered.endpoints));
            lines.push(format!("rows_written: {}", rendered.rows.len()));
            lines.push(format!("report: {}", rendered.report_path.display()));
            if !rendered.rows.is_empty() {
                lines.push("Top endpoints by time_sum:".to_owned());
            }
            for row in rendered.rows.iter().take(SUMMARY_TOP_ROWS) {
                lines.push(format!(
                    "  {:>10.3}s {:>7.3}% {:>8} req  med {:.3}s  max {:.3}s  {}",
                    row.time_sum, row.time_perc, row.count, row.time_med, row.time_max, row.url
                ));
            }
        }
    }
    lines
}
