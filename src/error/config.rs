use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error(
        "INI config '{path}' is not read. Rename it to .toml and quote string values (LOG_DIR = \"./log\")."
    )]
    IniConfig { path: PathBuf },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
    #[error("No config file found (looked for {candidates}). Pass one with --config.")]
    NoConfigFile { candidates: String },
    #[error("Config '{path}' has no [log_analyzer] section.")]
    MissingSection { path: PathBuf },
    #[error("Invalid number '{value}': {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("MAX_PARSE_FAILURE_PERCENT must be within 0..=100, got {value}.")]
    InvalidThreshold { value: f64 },
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
