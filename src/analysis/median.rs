/// Median of an unordered sample.
///
/// Odd lengths return the middle element of the sorted sample, even lengths
/// the mean of the two middle elements. Returns `None` for an empty sample.
#[must_use]
pub fn median(samples: &[f64]) -> Option<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return sorted.get(mid).copied();
    }
    let upper = *sorted.get(mid)?;
    let lower = *sorted.get(mid.checked_sub(1)?)?;
    Some((lower + upper) / 2.0)
}
