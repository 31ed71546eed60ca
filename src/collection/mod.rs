//! Uniform iteration over sequences and mappings.
//!
//! Every helper in this module is built on a single primitive, [`each`],
//! so that sequences and mappings follow one dispatch policy:
//!
//! - A **sequence** (`[T]`, `[T; N]`, `Vec<T>`, a JSON array) is visited in
//!   ascending index order and each element is reported with
//!   [`Position::Index`].
//! - A **mapping** (`HashMap`, `BTreeMap`, a JSON object) is visited in the
//!   mapping's own iteration order and each value is reported with
//!   [`Position::Key`].
//!
//! The choice between the two is made by [`Collection::shape`] at the call
//! boundary, not by inspecting values at runtime.
//!
//! # Overview
//!
//! - [`each`]: Visit every element with `(value, position, collection)`
//! - [`map`], [`pluck`]: Transform elements into a new `Vec`
//! - [`fold`], [`reduce`]: Accumulate elements left to right
//! - [`filter`], [`reject`], [`uniq`]: Select elements
//! - [`contains`], [`every`], [`some`], [`index_of`]: Query elements
//! - [`first`], [`first_n`], [`last`], [`last_n`]: Slice the ends of a sequence
//! - [`is_array_like`]: Tell sequences from mappings
//!
//! # Examples
//!
//! ```rust
//! use collection_utils::collection::{each, Position};
//! use std::collections::BTreeMap;
//!
//! let mut seen = Vec::new();
//! each(&vec!["a", "b"], |value, position, _| seen.push((position.index(), *value)));
//! assert_eq!(seen, vec![(Some(0), "a"), (Some(1), "b")]);
//!
//! let scores = BTreeMap::from([("ada", 3), ("grace", 5)]);
//! let mut keys = Vec::new();
//! each(&scores, |_, position, _| {
//!     if let Position::Key(key) = position {
//!         keys.push(*key);
//!     }
//! });
//! assert_eq!(keys, vec!["ada", "grace"]);
//! ```

mod query;
mod transform;

pub use query::{contains, every, first, first_n, index_of, last, last_n, some};
pub use transform::{Field, filter, fold, map, pluck, reduce, reject, uniq};

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Iterator over the entries of a mapping.
pub type Entries<'a, K, V> = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

/// How a collection is laid out: an ordered sequence or a key-value mapping.
///
/// Returned by [`Collection::shape`]; [`each`] dispatches on it.
pub enum Shape<'a, K, V> {
    /// Elements addressed by index `0..length`.
    Sequence(&'a [V]),
    /// Values addressed by key, in the mapping's own order.
    Mapping(Entries<'a, K, V>),
}

impl<K, V> Shape<'_, K, V> {
    /// Returns the length of a sequence, or `None` for a mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_utils::collection::Collection;
    /// use std::collections::HashMap;
    ///
    /// assert_eq!(vec![1, 2, 3].shape().length(), Some(3));
    /// assert_eq!(HashMap::<String, i32>::new().shape().length(), None);
    /// ```
    #[inline]
    pub const fn length(&self) -> Option<usize> {
        match self {
            Self::Sequence(items) => Some(items.len()),
            Self::Mapping(_) => None,
        }
    }
}

impl<K, V> fmt::Debug for Shape<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(items) => formatter
                .debug_struct("Sequence")
                .field("length", &items.len())
                .finish(),
            Self::Mapping(_) => formatter.write_str("Mapping"),
        }
    }
}

/// Where an element sits in its collection: an index or a key.
///
/// This is the second argument of every [`each`]-style callback.
#[derive(Debug, PartialEq, Eq)]
pub enum Position<'a, K> {
    /// Index into a sequence.
    Index(usize),
    /// Key of a mapping entry.
    Key(&'a K),
}

impl<'a, K> Position<'a, K> {
    /// Returns the index if this is a sequence position.
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Key(_) => None,
        }
    }

    /// Returns the key if this is a mapping position.
    #[inline]
    pub const fn key(&self) -> Option<&'a K> {
        match self {
            Self::Index(_) => None,
            Self::Key(key) => Some(*key),
        }
    }
}

impl<K> Clone for Position<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Position<'_, K> {}

/// A type that can be iterated by [`each`].
///
/// Implementors only describe their layout through [`Collection::shape`];
/// all iteration logic lives in [`each`].
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::{Collection, Shape, each};
///
/// struct Deck {
///     cards: Vec<&'static str>,
/// }
///
/// impl Collection for Deck {
///     type Key = usize;
///     type Value = &'static str;
///
///     fn shape(&self) -> Shape<'_, usize, &'static str> {
///         Shape::Sequence(&self.cards)
///     }
/// }
///
/// let deck = Deck { cards: vec!["ace", "king"] };
/// let mut count = 0;
/// each(&deck, |_, _, _| count += 1);
/// assert_eq!(count, 2);
/// ```
pub trait Collection {
    /// Key type reported for mapping entries. Sequences use `usize` and
    /// report positions as [`Position::Index`].
    type Key;

    /// Element type.
    type Value;

    /// Resolves the layout used for iteration.
    fn shape(&self) -> Shape<'_, Self::Key, Self::Value>;
}

impl<T> Collection for [T] {
    type Key = usize;
    type Value = T;

    #[inline]
    fn shape(&self) -> Shape<'_, usize, T> {
        Shape::Sequence(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key = usize;
    type Value = T;

    #[inline]
    fn shape(&self) -> Shape<'_, usize, T> {
        Shape::Sequence(self.as_slice())
    }
}

impl<T> Collection for Vec<T> {
    type Key = usize;
    type Value = T;

    #[inline]
    fn shape(&self) -> Shape<'_, usize, T> {
        Shape::Sequence(self.as_slice())
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn shape(&self) -> Shape<'_, K, V> {
        Shape::Mapping(Box::new(self.iter()))
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn shape(&self) -> Shape<'_, K, V> {
        Shape::Mapping(Box::new(self.iter()))
    }
}

#[cfg(feature = "serde")]
impl Collection for serde_json::Value {
    type Key = String;
    type Value = Self;

    /// Arrays are sequences and objects are mappings. Scalars behave as
    /// empty mappings, so iterating them visits nothing.
    fn shape(&self) -> Shape<'_, String, Self> {
        match self {
            Self::Array(items) => Shape::Sequence(items.as_slice()),
            Self::Object(entries) => Shape::Mapping(Box::new(entries.iter())),
            _ => Shape::Mapping(Box::new(std::iter::empty())),
        }
    }
}

#[cfg(feature = "serde")]
impl Collection for serde_json::Map<String, serde_json::Value> {
    type Key = String;
    type Value = serde_json::Value;

    fn shape(&self) -> Shape<'_, String, serde_json::Value> {
        Shape::Mapping(Box::new(self.iter()))
    }
}

/// Returns `true` if the collection is an ordered sequence with a length.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::is_array_like;
/// use std::collections::HashMap;
///
/// assert!(is_array_like(&[1, 2, 3]));
/// assert!(is_array_like(&Vec::<i32>::new()));
/// assert!(!is_array_like(&HashMap::from([("length", 3)])));
/// ```
#[inline]
pub fn is_array_like<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
{
    collection.shape().length().is_some()
}

/// Invokes `callback(value, position, collection)` once per element.
///
/// Sequences are visited in ascending index order. Mappings are visited in
/// whatever order the mapping iterates (unspecified for `HashMap`, sorted
/// for `BTreeMap`).
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::each;
///
/// let letters = ["a", "b", "c"];
/// let mut joined = String::new();
/// each(&letters, |letter, position, collection| {
///     joined.push_str(letter);
///     if position.index() != Some(collection.len() - 1) {
///         joined.push(',');
///     }
/// });
/// assert_eq!(joined, "a,b,c");
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut callback: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, Position<'a, C::Key>, &'a C),
{
    match collection.shape() {
        Shape::Sequence(items) => {
            for (index, value) in items.iter().enumerate() {
                callback(value, Position::Index(index), collection);
            }
        }
        Shape::Mapping(entries) => {
            for (key, value) in entries {
                callback(value, Position::Key(key), collection);
            }
        }
    }
}
