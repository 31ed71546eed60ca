#![cfg(feature = "decorator")]
//! Tests for deferred calls.
//!
//! Simulated time through `VirtualClock`, and real deferral on a Tokio
//! runtime with the paused test clock (feature `async`).

use collection_utils::decorator::{Scheduler, VirtualClock, delay_on};
use rstest::{fixture, rstest};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[fixture]
fn clock() -> VirtualClock {
    VirtualClock::new()
}

type Received = Arc<Mutex<Vec<(i32, i32)>>>;

fn record(received: &Received) -> impl FnOnce((i32, i32)) + Send + 'static {
    let sink = Arc::clone(received);
    move |arguments| sink.lock().unwrap().push(arguments)
}

// =============================================================================
// VirtualClock
// =============================================================================

#[rstest]
fn delay_waits_for_the_full_interval(clock: VirtualClock) {
    let received = Received::default();
    delay_on(&clock, record(&received), Duration::from_millis(100), (1, 2));

    clock.advance(Duration::from_millis(99));
    assert!(received.lock().unwrap().is_empty());

    clock.advance(Duration::from_millis(1));
    assert_eq!(*received.lock().unwrap(), vec![(1, 2)]);
}

#[rstest]
fn delay_returns_before_the_call(clock: VirtualClock) {
    let received = Received::default();
    delay_on(&clock, record(&received), Duration::ZERO, (3, 4));

    assert!(received.lock().unwrap().is_empty());
    assert_eq!(clock.pending(), 1);
}

#[rstest]
#[case(Duration::from_millis(100))]
#[case(Duration::from_secs(5))]
fn delay_runs_once_however_far_time_moves(clock: VirtualClock, #[case] beyond: Duration) {
    let received = Received::default();
    delay_on(&clock, record(&received), Duration::from_millis(100), (5, 6));

    clock.advance(Duration::from_millis(100));
    clock.advance(beyond);

    assert_eq!(received.lock().unwrap().len(), 1);
    assert_eq!(clock.pending(), 0);
}

#[rstest]
fn delayed_calls_run_in_due_order(clock: VirtualClock) {
    let received = Received::default();
    delay_on(&clock, record(&received), Duration::from_millis(30), (3, 0));
    delay_on(&clock, record(&received), Duration::from_millis(10), (1, 0));
    delay_on(&clock, record(&received), Duration::from_millis(20), (2, 0));

    assert_eq!(clock.advance(Duration::from_millis(30)), 3);
    assert_eq!(*received.lock().unwrap(), vec![(1, 0), (2, 0), (3, 0)]);
}

#[rstest]
fn delay_through_shared_scheduler(clock: VirtualClock) {
    let shared = Arc::new(clock);
    let received = Received::default();
    delay_on(&shared, record(&received), Duration::from_millis(1), (7, 8));
    assert!(received.lock().unwrap().is_empty());

    shared.advance(Duration::from_millis(1));
    assert_eq!(*received.lock().unwrap(), vec![(7, 8)]);
}

#[rstest]
fn delay_through_trait_object(clock: VirtualClock) {
    let received = Received::default();
    let scheduler: &dyn Scheduler = &clock;
    delay_on(scheduler, record(&received), Duration::from_millis(2), (9, 10));

    clock.advance(Duration::from_millis(2));
    assert_eq!(*received.lock().unwrap(), vec![(9, 10)]);
}

// =============================================================================
// Tokio
// =============================================================================

#[cfg(feature = "async")]
mod tokio_runtime {
    use super::*;
    use collection_utils::decorator::{TokioScheduler, delay};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn delay_fires_after_wait() {
        let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
        let started = Instant::now();

        delay(
            move |(left, right): (i32, i32)| {
                let _ = sender.send(left + right);
            },
            Duration::from_millis(100),
            (1, 2),
        );

        assert_eq!(receiver.recv().await, Some(3));
        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn delay_has_not_fired_before_wait() {
        let received = Received::default();
        delay(record(&received), Duration::from_millis(100), (1, 2));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(received.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(*received.lock().unwrap(), vec![(1, 2)]);
    }

    #[tokio::test]
    async fn current_scheduler_inside_runtime() {
        let scheduler = TokioScheduler::current().unwrap();
        let (sender, receiver) = tokio::sync::oneshot::channel();

        delay_on(
            &scheduler,
            move |word: &'static str| {
                let _ = sender.send(word);
            },
            Duration::from_millis(1),
            "done",
        );

        assert_eq!(receiver.await.unwrap(), "done");
    }
}
