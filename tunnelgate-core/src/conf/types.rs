use crate::metrics::{MetricsSink, TracingMetrics};
use crate::tunnel::TunnelGate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Top-level shape of `tunnelgate.hcl`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TunnelGateConfig {
    #[serde(default)]
    pub tunnels: TunnelLimitConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TunnelLimitConfig {
    /// Maximum concurrently open tunnels. Zero or negative disables limiting.
    #[serde(default)]
    pub max_concurrent: i64,

    /// Where denial counters go.
    #[serde(default)]
    pub metrics: MetricsKind,
}

#[derive(Debug, Copy, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricsKind {
    #[default]
    None,
    Tracing,
}

impl MetricsKind {
    pub fn build_sink(self) -> Option<Arc<dyn MetricsSink>> {
        match self {
            MetricsKind::None => None,
            MetricsKind::Tracing => Some(Arc::new(TracingMetrics)),
        }
    }
}

impl TunnelLimitConfig {
    pub fn is_enabled(&self) -> bool {
        self.max_concurrent > 0
    }

    pub fn build_gate(&self) -> TunnelGate {
        TunnelGate::new(self.max_concurrent, self.metrics.build_sink())
    }
}
