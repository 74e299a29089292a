use crate::metrics::MetricsSink;
use dashmap::DashMap;
use std::collections::BTreeMap;

/// Process-local counters, keyed by metric name.
#[derive(Debug, Default)]
pub struct InMemoryMetrics {
    counters: DashMap<String, i64>,
}

impl InMemoryMetrics {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Current value of a counter; unknown names read as zero.
    pub fn get(&self, name: &str) -> i64 {
        self.counters.get(name).map(|v| *v).unwrap_or(0)
    }

    pub fn snapshot(&self) -> BTreeMap<String, i64> {
        self.counters
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}

impl MetricsSink for InMemoryMetrics {
    fn incr(&self, name: &str, value: i64) {
        *self.counters.entry(name.to_string()).or_insert(0) += value;
    }
}
