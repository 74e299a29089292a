use serde::Serialize;

/// Point-in-time view of a gate, intended for admin/observability output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TunnelGateSnapshot {
    pub active: i64,
    pub max: i64,
    pub enabled: bool,
}
