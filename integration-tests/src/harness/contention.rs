use std::sync::{Arc, Barrier};
use std::thread;
use tunnelgate_core::TunnelAdmission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentionOutcome {
    pub granted: usize,
    pub denied: usize,
}

/// Release `callers` OS threads at once, each calling `acquire()` exactly once.
///
/// Granted slots are left held so the caller can inspect the gate afterwards.
pub fn race_threads<G>(gate: Arc<G>, callers: usize) -> ContentionOutcome
where
    G: TunnelAdmission + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(callers));

    let handles: Vec<_> = (0..callers)
        .map(|_| {
            let gate = Arc::clone(&gate);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                gate.acquire()
            })
        })
        .collect();

    let granted = handles
        .into_iter()
        .map(|h| h.join().expect("contention thread panicked"))
        .filter(|granted| *granted)
        .count();

    ContentionOutcome {
        granted,
        denied: callers - granted,
    }
}
