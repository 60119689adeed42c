//! Core library for the `log-analyzer` CLI.
//!
//! The binary picks the most recent rotated nginx access log from a
//! directory, aggregates request times per endpoint, ranks endpoints by total
//! time, and renders the top rows into an HTML report. The modules here hold
//! each stage: log discovery, line extraction and aggregation, report
//! rendering, plus the CLI/config layering that feeds them.
pub mod analysis;
pub mod app;
pub mod args;
pub mod config;
pub mod discovery;
pub mod error;
pub mod report;
