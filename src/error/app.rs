use thiserror::Error;

use super::{AnalysisError, ConfigError, DiscoveryError, ReportError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn discovery<E>(error: E) -> Self
    where
        E: Into<DiscoveryError>,
    {
        error.into().into()
    }

    pub fn analysis<E>(error: E) -> Self
    where
        E: Into<AnalysisError>,
    {
        error.into().into()
    }

    pub fn report<E>(error: E) -> Self
    where
        E: Into<ReportError>,
    {
        error.into().into()
    }

    /// True when the run stopped because the log layout no longer matches,
    /// as opposed to an infrastructure or configuration failure.
    #[must_use]
    pub const fn is_format_drift(&self) -> bool {
        matches!(
            self,
            AppError::Analysis(AnalysisError::TooManyParseFailures { .. })
        )
    }
}
