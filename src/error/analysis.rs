use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error during {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "Cannot parse log, the format may have changed: {failures} of {total} lines unparseable ({rate}% > {threshold}%)."
    )]
    TooManyParseFailures {
        failures: u64,
        total: u64,
        rate: f64,
        threshold: f64,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
