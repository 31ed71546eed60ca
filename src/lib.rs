//! # collection-utils
//!
//! Functional helpers for iterating, transforming, and merging collections,
//! plus a handful of function decorators.
//!
//! ## Overview
//!
//! - **Collections**: one iteration primitive, [`each`](collection::each),
//!   drives every other helper (`map`, `reduce`, `filter`, `uniq`, ...) over
//!   both ordered sequences and key-value mappings.
//! - **Objects**: [`extend`](object::extend) and [`defaults`](object::defaults)
//!   merge mappings into a target in place.
//! - **Decorators**: [`once`](decorator::once), [`memoize`](decorator::memoize)
//!   and [`delay`](decorator::delay_on) wrap functions with extra behavior.
//! - **Randomization**: [`shuffle`](random::shuffle) returns a Fisher-Yates
//!   permutation of a sequence.
//!
//! ## Feature Flags
//!
//! - `collection`: Iteration primitives
//! - `object`: Object merging (`extend`, `defaults`)
//! - `decorator`: `once`, `memoize`, scheduler-driven `delay_on`
//! - `random`: `shuffle`
//! - `async`: Tokio-backed `delay`
//! - `serde`: `serde_json::Value` and `Map` as collections and merge targets
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use collection_utils::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4];
//! let doubled = map(&numbers, |value, _, _| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//!
//! let total = reduce(&numbers, |sum, value, _, _| sum + value, None::<i32>);
//! assert_eq!(total, Some(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every helper of the enabled features.
///
/// # Usage
///
/// ```rust
/// use collection_utils::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;

    #[cfg(feature = "random")]
    pub use crate::random::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "decorator")]
pub mod decorator;

#[cfg(feature = "random")]
pub mod random;
