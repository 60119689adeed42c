mod analysis;
mod app;
mod config;
mod discovery;
mod report;

#[cfg(test)]
mod test_support;

pub use analysis::AnalysisError;
pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use discovery::DiscoveryError;
pub use report::ReportError;
