mod memory;
mod sink;


pub use memory::InMemoryMetrics;
pub use sink::{MetricsSink, NoopMetrics, TracingMetrics};

/// Incremented once per tunnel denied by the concurrency limit.
pub const TUNNELS_CONCURRENCY_LIMITED: &str = "tunnels.concurrency_limited";
