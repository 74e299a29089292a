use crate::tunnel::gate::TunnelGate;
use crate::tunnel::snapshot::TunnelGateSnapshot;
use std::sync::Arc;

/// Call surface shared by a gate and every handle to one.
///
/// `None` of an `Option<G>` is the null gate: it admits everything and
/// reports zero for both counters, so a handler holding an
/// `Option<Arc<TunnelGate>>` never has to branch on whether limiting is
/// configured.
pub trait TunnelAdmission {
    fn acquire(&self) -> bool;

    fn release(&self);

    fn active_count(&self) -> i64;

    fn capacity(&self) -> i64;

    fn snapshot(&self) -> TunnelGateSnapshot {
        let max = self.capacity();
        TunnelGateSnapshot {
            active: self.active_count(),
            max,
            enabled: max > 0,
        }
    }
}

impl TunnelAdmission for TunnelGate {
    fn acquire(&self) -> bool {
        TunnelGate::acquire(self)
    }

    fn release(&self) {
        TunnelGate::release(self)
    }

    fn active_count(&self) -> i64 {
        TunnelGate::active_count(self)
    }

    fn capacity(&self) -> i64 {
        TunnelGate::capacity(self)
    }
}

impl<G: TunnelAdmission + ?Sized> TunnelAdmission for &G {
    fn acquire(&self) -> bool {
        (**self).acquire()
    }

    fn release(&self) {
        (**self).release()
    }

    fn active_count(&self) -> i64 {
        (**self).active_count()
    }

    fn capacity(&self) -> i64 {
        (**self).capacity()
    }
}

impl<G: TunnelAdmission + ?Sized> TunnelAdmission for Arc<G> {
    fn acquire(&self) -> bool {
        (**self).acquire()
    }

    fn release(&self) {
        (**self).release()
    }

    fn active_count(&self) -> i64 {
        (**self).active_count()
    }

    fn capacity(&self) -> i64 {
        (**self).capacity()
    }
}

impl<G: TunnelAdmission> TunnelAdmission for Option<G> {
    fn acquire(&self) -> bool {
        match self {
            Some(gate) => gate.acquire(),
            None => true,
        }
    }

    fn release(&self) {
        if let Some(gate) = self {
            gate.release();
        }
    }

    fn active_count(&self) -> i64 {
        self.as_ref().map(|gate| gate.active_count()).unwrap_or(0)
    }

    fn capacity(&self) -> i64 {
        self.as_ref().map(|gate| gate.capacity()).unwrap_or(0)
    }
}
