use crate::metrics::{InMemoryMetrics, MetricsSink, TUNNELS_CONCURRENCY_LIMITED};
use crate::tunnel::{TunnelAdmission, TunnelGate, TunnelGateSnapshot};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Barrier;
use tracing::info;

/// Outcome of one contention run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub callers: usize,
    pub granted: usize,
    pub denied: usize,
    /// Gate state while every granted slot is still held.
    pub peak: TunnelGateSnapshot,
    pub concurrency_limited: i64,
    /// Gate count once every granted slot has been released.
    pub active_after_release: i64,
}

/// Race `callers` tasks against a gate of `max` slots, each acquiring once.
pub async fn run_simulation(max: i64, callers: usize) -> SimulationReport {
    let metrics = Arc::new(InMemoryMetrics::new());
    let sink: Arc<dyn MetricsSink> = metrics.clone();
    let gate = Arc::new(TunnelGate::new(max, Some(sink)));
    let start = Arc::new(Barrier::new(callers.max(1)));

    let tasks: Vec<_> = (0..callers)
        .map(|_| {
            let gate = Arc::clone(&gate);
            let start = Arc::clone(&start);
            tokio::spawn(async move {
                start.wait().await;
                gate.try_acquire().ok()
            })
        })
        .collect();

    let mut guards = Vec::with_capacity(callers);
    let mut denied = 0;
    for task in tasks {
        match task.await {
            Ok(Some(guard)) => guards.push(guard),
            Ok(None) => denied += 1,
            Err(err) => {
                tracing::error!(error = %err, "simulation caller failed");
                denied += 1;
            }
        }
    }

    let peak = gate.snapshot();
    let granted = guards.len();
    drop(guards);

    let report = SimulationReport {
        callers,
        granted,
        denied,
        peak,
        concurrency_limited: metrics.get(TUNNELS_CONCURRENCY_LIMITED),
        active_after_release: gate.active_count(),
    };

    info!(
        event = "simulation_complete",
        callers,
        granted,
        denied,
        max,
        "tunnel contention run finished"
    );

    report
}

/// Blocking entry point for the CLI.
pub fn simulate(max: i64, callers: usize) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(run_simulation(max, callers));
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
