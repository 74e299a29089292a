use std::fmt::Debug;
use tracing::info;

/// Counter side channel handed to the gate at construction.
///
/// Fire-and-forget: implementations must not block and have no way to
/// influence the caller.
pub trait MetricsSink: Send + Sync + Debug {
    fn incr(&self, name: &str, value: i64);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn incr(&self, _name: &str, _value: i64) {}
}

/// Publishes every increment as a structured log event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMetrics;

impl MetricsSink for TracingMetrics {
    fn incr(&self, name: &str, value: i64) {
        info!(event = "metric_incr", metric = name, value, "counter incremented");
    }
}
