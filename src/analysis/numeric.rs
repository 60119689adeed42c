/// Decimal places kept in every published figure.
const ROUND_SCALE: f64 = 1000.0;
const PERCENT: f64 = 100.0;

pub(super) fn round3(value: f64) -> f64 {
    (value * ROUND_SCALE).round() / ROUND_SCALE
}

/// `part / whole` as a percentage rounded to 3 places; 0 when `whole` is 0.
pub(super) fn percent_of(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    round3(part / whole * PERCENT)
}
