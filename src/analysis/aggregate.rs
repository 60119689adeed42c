use crate::error::{AnalysisError, AppError, AppResult};

use super::extract::{ParseFailure, extract};
use super::numeric::percent_of;
use super::stats::EndpointTable;

/// Highest tolerated share of unparseable lines, in percent.
pub const DEFAULT_MAX_PARSE_FAILURE_PERCENT: f64 = 20.0;
/// Emit a progress event every this many lines.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Totals of one full pass over a log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregationResult {
    pub endpoints: EndpointTable,
    /// Every line attempted, parsed or not.
    pub total_requests: u64,
    /// Sum of request times over parsed lines.
    pub total_time: f64,
    pub parse_failures: u64,
}

impl AggregationResult {
    /// Share of unparseable lines in percent, rounded to 3 places.
    #[must_use]
    pub fn parse_failure_rate(&self) -> f64 {
        percent_of(self.parse_failures as f64, self.total_requests as f64)
    }
}

/// Stateful fold over raw log lines.
#[derive(Debug, Default)]
pub struct Aggregator {
    result: AggregationResult,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one line and folds it in when it parses.
    ///
    /// # Errors
    ///
    /// Returns the extraction failure for lines that do not parse; the failure
    /// is already counted and the aggregator stays usable.
    pub fn observe(&mut self, line: &str) -> Result<(), ParseFailure> {
        self.result.total_requests = self.result.total_requests.saturating_add(1);
        match extract(line) {
            Ok(record) => {
                self.result
                    .endpoints
                    .record(record.endpoint, record.response_time);
                self.result.total_time += record.response_time;
                Ok(())
            }
            Err(failure) => {
                self.result.parse_failures = self.result.parse_failures.saturating_add(1);
                Err(failure)
            }
        }
    }

    #[must_use]
    pub const fn lines_seen(&self) -> u64 {
        self.result.total_requests
    }

    /// Closes the pass and applies the corruption threshold.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::TooManyParseFailures`] when the failure rate
    /// is strictly above `max_failure_percent`.
    pub fn finish(self, max_failure_percent: f64) -> AppResult<AggregationResult> {
        let result = self.result;
        let rate = result.parse_failure_rate();
        if rate > max_failure_percent {
            return Err(AppError::analysis(AnalysisError::TooManyParseFailures {
                failures: result.parse_failures,
                total: result.total_requests,
                rate,
                threshold: max_failure_percent,
            }));
        }
        tracing::debug!(
            lines = result.total_requests,
            endpoints = result.endpoints.len(),
            parse_failures = result.parse_failures,
            failure_rate = rate,
            "aggregation finished"
        );
        Ok(result)
    }
}

/// Folds a lazy line source into per-endpoint statistics in one pass.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] when the line source fails and
/// [`AnalysisError::TooManyParseFailures`] when too many lines do not parse.
pub fn aggregate<I, S>(lines: I, max_failure_percent: f64) -> AppResult<AggregationResult>
where
    I: IntoIterator<Item = std::io::Result<S>>,
    S: AsRef<str>,
{
    let mut aggregator = Aggregator::new();
    for line in lines {
        let line = line.map_err(|err| {
            AppError::analysis(AnalysisError::Io {
                context: "read access log",
                source: err,
            })
        })?;
        if let Err(failure) = aggregator.observe(line.as_ref()) {
            tracing::trace!(line = aggregator.lines_seen(), %failure, "skipping line");
        }
        if aggregator.lines_seen() % PROGRESS_INTERVAL == 0 {
            tracing::debug!(lines = aggregator.lines_seen(), "parsing in progress");
        }
    }
    aggregator.finish(max_failure_percent)
}
