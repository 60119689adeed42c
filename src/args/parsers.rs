use crate::error::ConfigError;

/// Maximum value accepted for a percentage threshold.
const PERCENT_MAX: f64 = 100.0;

pub(crate) fn parse_percent(s: &str) -> Result<f64, ConfigError> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|err| ConfigError::InvalidNumber {
            value: s.to_owned(),
            source: err,
        })?;
    ensure_percent(value)
}

pub(crate) fn ensure_percent(value: f64) -> Result<f64, ConfigError> {
    if (0.0..=PERCENT_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidThreshold { value })
    }
}
