use std::collections::HashMap;

use super::median::median;

/// Running statistics for one endpoint.
///
/// Created on the first successful observation, so `count >= 1` and the
/// sample list is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointStats {
    count: u64,
    time_sum: f64,
    time_max: f64,
    time_samples: Vec<f64>,
}

impl EndpointStats {
    pub(crate) fn new(first_time: f64) -> Self {
        Self {
            count: 1,
            time_sum: first_time,
            time_max: first_time,
            time_samples: vec![first_time],
        }
    }

    pub(crate) fn record(&mut self, time: f64) {
        self.count = self.count.saturating_add(1);
        self.time_sum += time;
        self.time_max = self.time_max.max(time);
        self.time_samples.push(time);
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub const fn time_sum(&self) -> f64 {
        self.time_sum
    }

    #[must_use]
    pub const fn time_max(&self) -> f64 {
        self.time_max
    }

    /// Observed times in arrival order.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.time_samples
    }

    #[must_use]
    pub fn time_median(&self) -> f64 {
        median(&self.time_samples).unwrap_or(self.time_max)
    }
}

/// Endpoint → statistics, iterated in order of first observation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EndpointTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, EndpointStats)>,
}

impl EndpointTable {
    pub(crate) fn record(&mut self, endpoint: &str, time: f64) {
        if let Some(stats) = self
            .index
            .get(endpoint)
            .and_then(|idx| self.entries.get_mut(*idx))
            .map(|(_, stats)| stats)
        {
            stats.record(time);
            return;
        }
        self.index.insert(endpoint.to_owned(), self.entries.len());
        self.entries
            .push((endpoint.to_owned(), EndpointStats::new(time)));
    }

    #[must_use]
    pub fn get(&self, endpoint: &str) -> Option<&EndpointStats> {
        self.index
            .get(endpoint)
            .and_then(|idx| self.entries.get(*idx))
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EndpointStats)> {
        self.entries
            .iter()
            .map(|(endpoint, stats)| (endpoint.as_str(), stats))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
