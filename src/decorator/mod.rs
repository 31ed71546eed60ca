//! Function decorators.
//!
//! A decorator takes a function and returns a value that calls it with
//! extra behavior:
//!
//! - [`once`]: run the function on the first call only, then replay its
//!   result
//! - [`memoize`] / [`memoize_by`]: run the function once per distinct
//!   argument key
//! - [`delay_on`] / `delay`: run the function once, later, on a
//!   [`Scheduler`]
//!
//! Arguments are always passed as a single value; use a tuple for several
//! arguments and `()` for none.
//!
//! # Examples
//!
//! ```rust
//! use collection_utils::decorator::{memoize, once};
//!
//! let first_greeting = once(|name: &str| format!("hello, {name}"));
//! assert_eq!(first_greeting.call("ada"), "hello, ada");
//! assert_eq!(first_greeting.call("grace"), "hello, ada");
//!
//! let square = memoize(|value: u64| value * value);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.len(), 1);
//! ```

mod delay;
mod error;
mod finite;
mod memoize;
mod once;
mod scheduler;

#[cfg(feature = "async")]
pub use delay::delay;
pub use delay::delay_on;
#[cfg(feature = "async")]
pub use error::ScheduleError;
pub use error::CacheKeyError;
pub use memoize::{CacheKey, JsonKey, KeyFn, Memoized, memoize, memoize_by};
pub use once::{Once, OnceState, once};
#[cfg(feature = "async")]
pub use scheduler::TokioScheduler;
pub use scheduler::{Scheduler, Task, VirtualClock};
