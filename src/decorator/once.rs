//! A function that runs at most once.
//!
//! [`Once`] wraps an `FnOnce`. The first [`Once::call`] runs it and keeps the
//! result; every later call returns that result without running anything.
//!
//! # Examples
//!
//! ```rust
//! use collection_utils::decorator::once;
//!
//! let add = once(|(x, y, z): (i32, i32, i32)| x + y + z);
//!
//! assert_eq!(add.call((1, 2, 3)), 6);
//! assert_eq!(add.call((4, 5, 6)), 6);
//! assert_eq!(add.call((7, 8, 9)), 6);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// The internal state of a [`Once`].
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// The function has not run yet.
    Pending(F),
    /// The function ran and produced this result.
    Fired(R),
    /// The function panicked. The `Once` is unusable.
    Poisoned,
}

/// A function decorator that runs the wrapped function on the first call
/// only.
///
/// The wrapped function receives the arguments of the first call. Closures
/// capture their environment, so there is no separate receiver to forward.
///
/// # Thread Safety
///
/// `Once` keeps its state in a `RefCell` and is therefore not `Sync`; only
/// one thread can ever drive it.
///
/// # Examples
///
/// ```rust
/// use collection_utils::decorator::Once;
/// use std::cell::Cell;
///
/// let runs = Cell::new(0);
/// let initialize = Once::new(|()| {
///     runs.set(runs.get() + 1);
///     "ready"
/// });
///
/// assert!(!initialize.is_fired());
/// initialize.call(());
/// initialize.call(());
/// assert_eq!(runs.get(), 1);
/// assert!(initialize.is_fired());
/// ```
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

/// Wraps `function` so that it runs at most once.
///
/// Shorthand for [`Once::new`].
#[inline]
pub const fn once<A, F, R>(function: F) -> Once<F, R>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

impl<F, R> Once<F, R> {
    /// Creates a `Once` that has not fired yet.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
        }
    }

    /// Calls the wrapped function with `arguments` if it has not run yet,
    /// and returns a clone of its (first) result.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics, the `Once` becomes poisoned and
    ///   that panic propagates.
    /// - If the `Once` is already poisoned.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        let function = {
            let mut state = self.state.borrow_mut();
            if let OnceState::Fired(result) = &*state {
                return result.clone();
            }

            // Stay poisoned until the function returns, so a panic leaves
            // the `Once` unusable.
            let OnceState::Pending(function) =
                std::mem::replace(&mut *state, OnceState::Poisoned)
            else {
                panic!("Once instance has been poisoned");
            };
            function
        };

        tracing::trace!("once: running wrapped function");
        let result = function(arguments);
        *self.state.borrow_mut() = OnceState::Fired(result.clone());
        result
    }

    /// Returns the stored result if the function has run.
    pub fn get(&self) -> Option<Ref<'_, R>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            OnceState::Fired(result) => Some(result),
            _ => None,
        })
        .ok()
    }

    /// Returns `true` once the wrapped function has produced a result.
    pub fn is_fired(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Fired(_))
    }

    /// Returns `true` if the wrapped function panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Poisoned)
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Fired(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
        }
    }
}
