//! Result caching keyed by the call arguments.
//!
//! [`memoize`] wraps a function so that each distinct argument list is
//! computed once. The cache key is the JSON serialization of the whole
//! argument value, which is positional: `(vec![1, 2, 3],)` and `(1, 2, 3)`
//! produce `[[1,2,3]]` and `[1,2,3]` respectively, two different keys.
//! Map entries are written in sorted key order, so equal `HashMap`s give
//! equal keys whatever their iteration order. Non-finite floats have no key.
//!
//! # Examples
//!
//! ```rust
//! use collection_utils::decorator::memoize;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let add = memoize(|(left, right): (i32, i32)| {
//!     calls.set(calls.get() + 1);
//!     left + right
//! });
//!
//! assert_eq!(add.call((1, 2)), 3);
//! assert_eq!(add.call((1, 2)), 3);
//! assert_eq!(add.call((3, 4)), 7);
//! assert_eq!(calls.get(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::CacheKeyError;
use super::finite::FiniteFloats;

/// Derives the canonical cache key of an argument value.
pub trait CacheKey<A: ?Sized> {
    /// Returns the key under which the result for `arguments` is cached.
    ///
    /// # Errors
    ///
    /// Returns [`CacheKeyError`] if no key can be derived.
    fn cache_key(&self, arguments: &A) -> Result<String, CacheKeyError>;
}

/// The default key: the arguments serialized as compact JSON, with object
/// keys sorted.
///
/// Fails for arguments JSON cannot represent: maps with non-string keys and
/// NaN or infinite floats.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonKey;

impl<A> CacheKey<A> for JsonKey
where
    A: Serialize + ?Sized,
{
    fn cache_key(&self, arguments: &A) -> Result<String, CacheKeyError> {
        arguments.serialize(FiniteFloats)?;
        Ok(serde_json::to_value(arguments)?.to_string())
    }
}

/// A key computed by a caller-supplied function.
///
/// Built by [`memoize_by`].
#[derive(Clone, Copy)]
pub struct KeyFn<H>(H);

impl<A, H> CacheKey<A> for KeyFn<H>
where
    A: ?Sized,
    H: Fn(&A) -> String,
{
    fn cache_key(&self, arguments: &A) -> Result<String, CacheKeyError> {
        Ok((self.0)(arguments))
    }
}

impl<H> fmt::Debug for KeyFn<H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("KeyFn(<function>)")
    }
}

/// A memoized function: the wrapped function plus its private cache.
///
/// Lookups test for the presence of the key, so results such as `0`, `""`
/// or `false` are cache hits like any other.
///
/// # Thread Safety
///
/// The cache lives in a `RefCell`; `Memoized` is not `Sync`.
pub struct Memoized<F, R, K = JsonKey> {
    function: F,
    key: K,
    cache: RefCell<HashMap<String, R>>,
}

/// Wraps `function` with a cache keyed by the JSON form of its arguments.
///
/// Pass several arguments as a tuple.
#[inline]
pub fn memoize<A, F, R>(function: F) -> Memoized<F, R>
where
    A: Serialize,
    F: Fn(A) -> R,
{
    Memoized {
        function,
        key: JsonKey,
        cache: RefCell::new(HashMap::new()),
    }
}

/// Wraps `function` with a cache keyed by `hasher(&arguments)`.
///
/// # Examples
///
/// ```rust
/// use collection_utils::decorator::memoize_by;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let length = memoize_by(
///     |word: String| {
///         calls.set(calls.get() + 1);
///         word.len()
///     },
///     |word: &String| word.to_lowercase(),
/// );
///
/// assert_eq!(length.call("Hello".to_string()), 5);
/// assert_eq!(length.call("HELLO".to_string()), 5);
/// assert_eq!(calls.get(), 1);
/// ```
#[inline]
pub fn memoize_by<A, F, R, H>(function: F, hasher: H) -> Memoized<F, R, KeyFn<H>>
where
    F: Fn(A) -> R,
    H: Fn(&A) -> String,
{
    Memoized {
        function,
        key: KeyFn(hasher),
        cache: RefCell::new(HashMap::new()),
    }
}

impl<F, R, K> Memoized<F, R, K> {
    /// Returns the cached result for `arguments`, computing and storing it
    /// on the first call with that key.
    ///
    /// If no key can be derived, the function is called without caching and
    /// a warning is logged.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: Fn(A) -> R,
        K: CacheKey<A>,
        R: Clone,
    {
        match self.key.cache_key(&arguments) {
            Ok(key) => self.lookup_or_compute(key, arguments),
            Err(error) => {
                tracing::warn!(%error, "memoize: bypassing cache");
                (self.function)(arguments)
            }
        }
    }

    /// Like [`call`](Self::call), but reports a key failure instead of
    /// bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`CacheKeyError`] if the arguments cannot be turned into a
    /// key. The wrapped function is not called in that case.
    pub fn try_call<A>(&self, arguments: A) -> Result<R, CacheKeyError>
    where
        F: Fn(A) -> R,
        K: CacheKey<A>,
        R: Clone,
    {
        let key = self.key.cache_key(&arguments)?;
        Ok(self.lookup_or_compute(key, arguments))
    }

    fn lookup_or_compute<A>(&self, key: String, arguments: A) -> R
    where
        F: Fn(A) -> R,
        R: Clone,
    {
        if let Some(cached) = self.cache.borrow().get(&key) {
            tracing::trace!(%key, "memoize: cache hit");
            return cached.clone();
        }

        tracing::trace!(%key, "memoize: cache miss");
        // The cache is not borrowed while the function runs.
        let result = (self.function)(arguments);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<F, R, K: fmt::Debug> fmt::Debug for Memoized<F, R, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("key", &self.key)
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}
