//! Log parsing and aggregation engine.
//!
//! Lines flow through [`extract`] into an [`Aggregator`], whose
//! [`AggregationResult`] is shaped into ranked [`ReportRow`]s by
//! [`build_report`].
mod aggregate;
mod extract;
mod median;
mod numeric;
mod report;
mod stats;


pub use aggregate::{AggregationResult, Aggregator, DEFAULT_MAX_PARSE_FAILURE_PERCENT, aggregate};
pub use extract::{LogRecord, ParseFailure, extract};
pub use median::median;
pub use report::{ReportRow, RowLimit, build_report};
pub use stats::{EndpointStats, EndpointTable};
