use crate::metrics::{MetricsSink, TUNNELS_CONCURRENCY_LIMITED};
use crate::tunnel::error::TunnelLimitExceeded;
use crate::tunnel::guard::TunnelGuard;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, warn};

/// Limits the number of concurrently open CONNECT tunnels.
///
/// Unlike a request rate limiter this counts long-lived tunnels, not request
/// processing time. A gate built with `max_tunnels <= 0` is disabled: it
/// admits everything and never counts.
///
/// Caller obligation: `release()` must be called exactly once for every
/// `acquire()` that returned `true`, and never otherwise. The gate does not
/// check this; unbalanced releases drive the count negative.
#[derive(Debug)]
pub struct TunnelGate {
    max_tunnels: i64,
    active: AtomicI64,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl TunnelGate {
    pub fn new(max_tunnels: i64, metrics: Option<Arc<dyn MetricsSink>>) -> Self {
        Self {
            max_tunnels,
            active: AtomicI64::new(0),
            metrics,
        }
    }

    /// A gate that admits everything.
    pub fn disabled() -> Self {
        Self::new(0, None)
    }

    pub fn is_enabled(&self) -> bool {
        self.max_tunnels > 0
    }

    /// Attempt to take one tunnel slot.
    ///
    /// Returns `false` when the gate is full; nothing is mutated in that case.
    pub fn acquire(&self) -> bool {
        if !self.is_enabled() {
            return true;
        }

        let mut current = self.active.load(Ordering::Relaxed);
        loop {
            if current >= self.max_tunnels {
                self.on_limited(current);
                return false;
            }
            match self.active.compare_exchange_weak(
                current,
                current + 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    debug!(active = current + 1, max = self.max_tunnels, "tunnel slot acquired");
                    return true;
                }
                Err(actual) => current = actual,
            }
        }
    }

    /// Give back a slot taken by a successful `acquire()`.
    pub fn release(&self) {
        if !self.is_enabled() {
            return;
        }

        let previous = self.active.fetch_sub(1, Ordering::Relaxed);
        debug!(active = previous - 1, max = self.max_tunnels, "tunnel slot released");
    }

    pub fn active_count(&self) -> i64 {
        self.active.load(Ordering::Relaxed)
    }

    /// The configured maximum, exactly as passed to `new`.
    pub fn capacity(&self) -> i64 {
        self.max_tunnels
    }

    /// Acquire a slot wrapped in a guard that releases it on drop.
    pub fn try_acquire(self: &Arc<Self>) -> Result<TunnelGuard, TunnelLimitExceeded> {
        if !self.acquire() {
            return Err(TunnelLimitExceeded);
        }

        Ok(TunnelGuard::new_acquired(Arc::clone(self)))
    }

    fn on_limited(&self, current: i64) {
        warn!(
            event = "tunnel_limited",
            active = current,
            max = self.max_tunnels,
            "tunnel concurrency limit reached, rejecting"
        );

        if let Some(metrics) = &self.metrics {
            metrics.incr(TUNNELS_CONCURRENCY_LIMITED, 1);
        }
    }
}
