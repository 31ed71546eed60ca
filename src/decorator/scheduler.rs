//! Deferred-execution facilities used by [`delay_on`](super::delay_on).
//!
//! A [`Scheduler`] accepts a task and a wait and runs the task, once, no
//! sooner than that wait. Two implementations are provided:
//!
//! - [`VirtualClock`]: simulated time that only moves when
//!   [`VirtualClock::advance`] is called. Deterministic; suited to tests.
//! - `TokioScheduler` (feature `async`): a Tokio task that sleeps until the
//!   deadline and then runs the callback.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a task after a wait.
pub trait Scheduler {
    /// Arranges for `task` to run once, no sooner than `wait` from now.
    ///
    /// Must not block the caller.
    fn schedule(&self, task: Task, wait: Duration);
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, task: Task, wait: Duration) {
        (**self).schedule(task, wait);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for std::sync::Arc<S> {
    fn schedule(&self, task: Task, wait: Duration) {
        (**self).schedule(task, wait);
    }
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_sequence: u64,
    /// Keyed by due time, then by scheduling order.
    queue: BTreeMap<(Duration, u64), Task>,
}

/// A scheduler driven by simulated time.
///
/// Time starts at zero and moves only through [`advance`](Self::advance),
/// which runs every task that has come due, earliest first and, for equal
/// due times, in the order they were scheduled.
///
/// # Examples
///
/// ```rust
/// use collection_utils::decorator::{VirtualClock, delay_on};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
///
/// let clock = VirtualClock::new();
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
///
/// delay_on(&clock, move |()| { counter.fetch_add(1, Ordering::SeqCst); }, Duration::from_millis(100), ());
///
/// clock.advance(Duration::from_millis(99));
/// assert_eq!(calls.load(Ordering::SeqCst), 0);
///
/// clock.advance(Duration::from_millis(1));
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct VirtualClock {
    state: Mutex<ClockState>,
}

impl VirtualClock {
    /// Creates a clock at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the simulated time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Returns the number of tasks that have not run yet.
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Moves the clock forward by `by`, running every task that comes due,
    /// and returns how many tasks ran.
    ///
    /// Tasks scheduled by a running task are also run if they fall due
    /// within the same advance. Tasks run without the clock locked.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.lock().now.saturating_add(by);
        let mut ran = 0;
        loop {
            let due_task = {
                let mut state = self.state.lock();
                let next_due = state.queue.first_key_value().map(|(&(due, _), _)| due);
                match next_due {
                    Some(due) if due <= target => {
                        state.now = due;
                        state.queue.pop_first().map(|(_, task)| task)
                    }
                    _ => None,
                }
            };
            let Some(task) = due_task else {
                break;
            };
            task();
            ran += 1;
        }
        self.state.lock().now = target;
        tracing::trace!(ran, now = ?target, "virtual clock advanced");
        ran
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&self, task: Task, wait: Duration) {
        let mut state = self.state.lock();
        let due = state.now.saturating_add(wait);
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.queue.insert((due, sequence), task);
    }
}

impl fmt::Debug for VirtualClock {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("VirtualClock")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

/// A scheduler backed by a Tokio runtime.
///
/// Each task becomes a spawned Tokio task that sleeps until its deadline.
/// The deadline is fixed when the task is scheduled, so a paused test clock
/// advanced before the spawned task is first polled still counts.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
}

#[cfg(feature = "async")]
impl TokioScheduler {
    /// Creates a scheduler that spawns onto `handle`.
    pub const fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler for the runtime running on this thread.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NoRuntime`](super::ScheduleError::NoRuntime)
    /// when called outside a Tokio runtime.
    pub fn current() -> Result<Self, super::ScheduleError> {
        tokio::runtime::Handle::try_current()
            .map(Self::new)
            .map_err(|_| super::ScheduleError::NoRuntime)
    }
}

#[cfg(feature = "async")]
impl Scheduler for TokioScheduler {
    fn schedule(&self, task: Task, wait: Duration) {
        let deadline = {
            let _guard = self.handle.enter();
            tokio::time::Instant::now() + wait
        };
        drop(self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task();
        }));
    }
}
