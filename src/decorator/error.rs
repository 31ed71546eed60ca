//! Error types raised by the decorators.

use std::error::Error;
use std::fmt;

/// The arguments of a memoized call could not be turned into a cache key.
///
/// Returned by [`Memoized::try_call`](super::Memoized::try_call) when the
/// default JSON key cannot serialize the arguments, for example a map whose
/// keys are not strings or a NaN float.
///
/// # Examples
///
/// ```rust
/// use collection_utils::decorator::memoize;
/// use std::collections::HashMap;
///
/// let size = memoize(|(table,): (HashMap<(i32, i32), i32>,)| table.len());
/// let error = size.try_call((HashMap::from([((1, 2), 3)]),)).unwrap_err();
/// assert!(error.to_string().starts_with("cannot build memoization key"));
/// ```
#[derive(Debug)]
pub struct CacheKeyError {
    source: serde_json::Error,
}

impl fmt::Display for CacheKeyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "cannot build memoization key: {}", self.source)
    }
}

impl Error for CacheKeyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl From<serde_json::Error> for CacheKeyError {
    fn from(source: serde_json::Error) -> Self {
        Self { source }
    }
}

/// A deferred call could not be handed to a scheduler.
#[cfg(feature = "async")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// No Tokio runtime is running on the current thread.
    NoRuntime,
}

#[cfg(feature = "async")]
impl fmt::Display for ScheduleError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRuntime => write!(
                formatter,
                "cannot schedule deferred call: no Tokio runtime is running on this thread"
            ),
        }
    }
}

#[cfg(feature = "async")]
impl Error for ScheduleError {}
