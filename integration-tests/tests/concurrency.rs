use integration_tests::harness::{ContentionOutcome, race_threads};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tunnelgate_core::TunnelGate;
use tunnelgate_core::metrics::{InMemoryMetrics, MetricsSink, TUNNELS_CONCURRENCY_LIMITED};

const LIMIT: i64 = 10;
const CALLERS: usize = 100;

#[test]
fn hundred_threads_against_ten_slots() {
    // Arrange
    let metrics = Arc::new(InMemoryMetrics::new());
    let sink: Arc<dyn MetricsSink> = metrics.clone();
    let gate = Arc::new(TunnelGate::new(LIMIT, Some(sink)));

    // Act
    let outcome = race_threads(Arc::clone(&gate), CALLERS);

    // Assert
    assert_eq!(
        outcome,
        ContentionOutcome {
            granted: 10,
            denied: 90,
        }
    );
    assert_eq!(gate.active_count(), LIMIT);
    assert_eq!(metrics.get(TUNNELS_CONCURRENCY_LIMITED), 90);

    // Release all
    for _ in 0..LIMIT {
        gate.release();
    }
    assert_eq!(gate.active_count(), 0);
}

#[test]
fn released_slot_goes_to_exactly_one_racer() {
    // Arrange
    let gate = Arc::new(TunnelGate::new(LIMIT, None));
    let first = race_threads(Arc::clone(&gate), CALLERS);
    assert_eq!(first.granted, LIMIT as usize);

    // Act
    gate.release();
    let second = race_threads(Arc::clone(&gate), CALLERS);

    // Assert
    assert_eq!(second.granted, 1);
    assert_eq!(second.denied, CALLERS - 1);
    assert_eq!(gate.active_count(), LIMIT);
}

#[test]
fn repeated_rounds_stay_exact() {
    let gate = Arc::new(TunnelGate::new(LIMIT, None));

    for _ in 0..20 {
        let outcome = race_threads(Arc::clone(&gate), 50);
        assert_eq!(outcome.granted, LIMIT as usize);
        assert_eq!(gate.active_count(), LIMIT);

        for _ in 0..LIMIT {
            gate.release();
        }
        assert_eq!(gate.active_count(), 0);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn tokio_handlers_hold_guards_until_tunnel_closes() {
    // Arrange
    let gate = Arc::new(TunnelGate::new(LIMIT, None));
    let start = Arc::new(tokio::sync::Barrier::new(CALLERS));
    let close = Arc::new(tokio::sync::Notify::new());

    // Act: every handler tries to open a tunnel and, if admitted, keeps it
    // open until told to close.
    let handlers: Vec<_> = (0..CALLERS)
        .map(|_| {
            let gate = Arc::clone(&gate);
            let start = Arc::clone(&start);
            let close = Arc::clone(&close);
            tokio::spawn(async move {
                start.wait().await;
                let closed = close.notified();
                match gate.try_acquire() {
                    Ok(_guard) => {
                        closed.await;
                        true
                    }
                    Err(_) => false,
                }
            })
        })
        .collect();

    while gate.active_count() < LIMIT {
        tokio::task::yield_now().await;
    }
    assert_eq!(gate.active_count(), LIMIT);

    close.notify_waiters();

    let mut granted = 0;
    for handler in handlers {
        if handler.await.unwrap() {
            granted += 1;
        }
    }

    // Assert
    assert_eq!(granted, LIMIT as usize);
    assert_eq!(gate.active_count(), 0);
}
