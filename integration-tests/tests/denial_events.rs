use integration_tests::harness::capture_events;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tunnelgate_core::TunnelGate;
use tunnelgate_core::metrics::{InMemoryMetrics, MetricsSink, TracingMetrics};

#[test]
fn denial_logs_a_warning_with_limits() {
    // Arrange
    let gate = TunnelGate::new(1, None);
    assert!(gate.acquire());

    // Act
    let (admitted, events) = capture_events(|| gate.acquire());

    // Assert
    assert!(!admitted);
    let denial = events
        .iter()
        .find(|e| e.field("event") == Some("tunnel_limited"))
        .expect("denial event");
    assert_eq!(denial.level, tracing::Level::WARN);
    assert_eq!(denial.field("active"), Some("1"));
    assert_eq!(denial.field("max"), Some("1"));
}

#[test]
fn disabled_gate_is_silent() {
    let gate = TunnelGate::new(0, None);

    let (_, events) = capture_events(|| {
        for _ in 0..10 {
            gate.acquire();
            gate.release();
        }
    });

    assert!(events.is_empty());
}

#[test]
fn tracing_sink_publishes_the_counter() {
    // Arrange
    let sink: Arc<dyn MetricsSink> = Arc::new(TracingMetrics);
    let gate = TunnelGate::new(1, Some(sink));
    assert!(gate.acquire());

    // Act
    let (_, events) = capture_events(|| gate.acquire());

    // Assert
    let metric = events
        .iter()
        .find(|e| e.field("event") == Some("metric_incr"))
        .expect("metric event");
    assert_eq!(metric.field("metric"), Some("tunnels.concurrency_limited"));
    assert_eq!(metric.field("value"), Some("1"));
}

#[test]
fn grant_and_release_log_at_debug() {
    let metrics: Arc<dyn MetricsSink> = Arc::new(InMemoryMetrics::new());
    let gate = TunnelGate::new(3, Some(metrics));

    let (_, events) = capture_events(|| {
        gate.acquire();
        gate.release();
    });

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.level == tracing::Level::DEBUG));
}
