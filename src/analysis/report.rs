use serde::Serialize;

use super::aggregate::AggregationResult;
use super::numeric::{percent_of, round3};
use super::stats::EndpointStats;

/// How many rows survive truncation for a given report size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowLimit {
    /// Exactly `report_size` rows.
    #[default]
    Exact,
    /// `report_size + 1` rows, matching reports produced by earlier releases.
    Legacy,
}

impl RowLimit {
    #[must_use]
    pub const fn row_count(self, report_size: usize) -> usize {
        match self {
            RowLimit::Exact => report_size,
            RowLimit::Legacy => report_size.saturating_add(1),
        }
    }
}

/// One endpoint's line in the rendered table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    pub url: String,
    pub count: u64,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    pub time_max: f64,
    pub time_med: f64,
}

impl ReportRow {
    fn from_stats(url: &str, stats: &EndpointStats, result: &AggregationResult) -> Self {
        let count = stats.count();
        Self {
            url: url.to_owned(),
            count,
            count_perc: percent_of(count as f64, result.total_requests as f64),
            time_sum: round3(stats.time_sum()),
            time_perc: percent_of(stats.time_sum(), result.total_time),
            time_avg: round3(stats.time_sum() / count as f64),
            time_max: round3(stats.time_max()),
            time_med: round3(stats.time_median()),
        }
    }
}

/// Ranks endpoints by total request time and keeps the top of the list.
///
/// Sorting is stable on the rounded `time_sum`, so equal sums keep the order
/// in which endpoints were first seen. Medians are only computed for rows
/// that survive truncation.
#[must_use]
pub fn build_report(
    result: &AggregationResult,
    report_size: usize,
    limit: RowLimit,
) -> Vec<ReportRow> {
    let mut ranked: Vec<(&str, &EndpointStats, f64)> = result
        .endpoints
        .iter()
        .map(|(url, stats)| (url, stats, round3(stats.time_sum())))
        .collect();
    ranked.sort_by(|left, right| right.2.total_cmp(&left.2));
    ranked.truncate(limit.row_count(report_size));

    ranked
        .into_iter()
        .map(|(url, stats, _)| ReportRow::from_stats(url, stats, result))
        .collect()
}
