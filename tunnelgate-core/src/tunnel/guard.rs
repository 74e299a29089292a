use crate::tunnel::gate::TunnelGate;
use std::sync::Arc;

/// RAII guard for a single acquired tunnel slot.
///
/// Invariants:
/// - A guard is created *only after* TunnelGate::acquire() succeeds
/// - The slot is released exactly once on Drop
#[derive(Debug)]
pub struct TunnelGuard {
    gate: Arc<TunnelGate>,
}

impl TunnelGuard {
    /// Create a guard for an already-acquired slot.
    /// Restricted to the crate so a guard can't be forged past the limit.
    pub(crate) fn new_acquired(gate: Arc<TunnelGate>) -> Self {
        Self { gate }
    }

    pub fn gate(&self) -> &Arc<TunnelGate> {
        &self.gate
    }
}

impl Drop for TunnelGuard {
    /// Release the slot when the tunnel closes.
    fn drop(&mut self) {
        self.gate.release();
    }
}
