use super::{AnalysisError, ConfigError, DiscoveryError, ReportError};

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for DiscoveryError {
    fn from(message: &'static str) -> Self {
        DiscoveryError::TestExpectation { message }
    }
}

impl From<String> for DiscoveryError {
    fn from(value: String) -> Self {
        DiscoveryError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for AnalysisError {
    fn from(message: &'static str) -> Self {
        AnalysisError::TestExpectation { message }
    }
}

impl From<String> for AnalysisError {
    fn from(value: String) -> Self {
        AnalysisError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ReportError {
    fn from(message: &'static str) -> Self {
        ReportError::TestExpectation { message }
    }
}

impl From<String> for ReportError {
    fn from(value: String) -> Self {
        ReportError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
