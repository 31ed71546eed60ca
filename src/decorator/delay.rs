//! Fire-and-forget deferred calls.

use std::time::Duration;

use super::Scheduler;

/// Schedules `function(arguments)` to run once, no sooner than `wait`, on
/// `scheduler`.
///
/// Returns immediately. Several arguments are passed as a tuple. Once
/// scheduled, the call cannot be withdrawn.
///
/// # Examples
///
/// ```rust
/// use collection_utils::decorator::{VirtualClock, delay_on};
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let clock = VirtualClock::new();
/// let received = Arc::new(Mutex::new(None));
/// let sink = Arc::clone(&received);
///
/// delay_on(
///     &clock,
///     move |(first, second): (i32, i32)| *sink.lock().unwrap() = Some(first + second),
///     Duration::from_millis(100),
///     (1, 2),
/// );
///
/// clock.advance(Duration::from_millis(100));
/// assert_eq!(*received.lock().unwrap(), Some(3));
/// ```
pub fn delay_on<S, F, A>(scheduler: &S, function: F, wait: Duration, arguments: A)
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    tracing::debug!(wait_ms = wait.as_millis(), "delay: scheduling deferred call");
    scheduler.schedule(
        Box::new(move || {
            tracing::trace!("delay: running deferred call");
            function(arguments);
        }),
        wait,
    );
}

/// Schedules `function(arguments)` to run once, no sooner than `wait`, on
/// the Tokio runtime of the calling thread.
///
/// Returns immediately; the call happens on a spawned Tokio task.
///
/// # Panics
///
/// Panics when called outside a Tokio runtime, like [`tokio::spawn`]. Use
/// [`TokioScheduler::current`](super::TokioScheduler::current) with
/// [`delay_on`] to handle that case.
///
/// # Examples
///
/// ```rust
/// use collection_utils::decorator::delay;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
/// delay(move |word| { let _ = sender.send(word); }, Duration::from_millis(10), "later");
///
/// assert_eq!(receiver.recv().await, Some("later"));
/// # }
/// ```
#[cfg(feature = "async")]
pub fn delay<F, A>(function: F, wait: Duration, arguments: A)
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    let scheduler = super::TokioScheduler::new(tokio::runtime::Handle::current());
    delay_on(&scheduler, function, wait, arguments);
}
