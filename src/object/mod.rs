//! Merging mappings into a target object.
//!
//! - [`extend`]: copy every entry of every source onto the target, later
//!   sources winning
//! - [`defaults`]: copy only the entries whose key the target lacks, earlier
//!   sources winning
//!
//! Both walk the sources with [`each`] and return the very target they were
//! given, so calls can be chained.
//!
//! # Examples
//!
//! ```rust
//! use collection_utils::object::{defaults, extend};
//! use std::collections::HashMap;
//!
//! let mut settings = HashMap::from([("color", "red")]);
//! extend(&mut settings, &[&HashMap::from([("size", "large")])]);
//! defaults(&mut settings, &[&HashMap::from([("color", "blue"), ("shape", "round")])]);
//!
//! assert_eq!(settings["color"], "red");
//! assert_eq!(settings["size"], "large");
//! assert_eq!(settings["shape"], "round");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::collection::{Collection, Position, each};

/// A mutable keyed target for [`extend`] and [`defaults`].
pub trait Object {
    /// Key type.
    type Key;

    /// Value type.
    type Value;

    /// Sets `key` to `value`, replacing any previous value.
    fn assign(&mut self, key: Self::Key, value: Self::Value);

    /// Returns `true` if nothing is stored under `key`.
    ///
    /// A key holding a "falsy" value such as `0`, `""` or `null` is not
    /// vacant.
    fn is_vacant(&self, key: &Self::Key) -> bool;
}

/// A [`Collection`] whose elements are always addressed by key.
///
/// Only mappings can be merged into an [`Object`]; sequences have no keys.
pub trait Mapping: Collection {}

impl<K, V, S> Mapping for HashMap<K, V, S> {}

impl<K, V> Mapping for BTreeMap<K, V> {}

#[cfg(feature = "serde")]
impl Mapping for serde_json::Map<String, serde_json::Value> {}

impl<K, V, S> Object for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn is_vacant(&self, key: &K) -> bool {
        !self.contains_key(key)
    }
}

impl<K, V> Object for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn is_vacant(&self, key: &K) -> bool {
        !self.contains_key(key)
    }
}

#[cfg(feature = "serde")]
impl Object for serde_json::Map<String, serde_json::Value> {
    type Key = String;
    type Value = serde_json::Value;

    fn assign(&mut self, key: String, value: serde_json::Value) {
        self.insert(key, value);
    }

    fn is_vacant(&self, key: &String) -> bool {
        !self.contains_key(key)
    }
}

/// Copies every entry of every source onto `target`.
///
/// Sources are applied in order, so on a key conflict the last source wins.
/// Returns `target` itself.
///
/// # Examples
///
/// ```rust
/// use collection_utils::object::extend;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("x", 1)]);
/// let extended = extend(
///     &mut target,
///     &[&BTreeMap::from([("a", 2)]), &BTreeMap::from([("a", 3)])],
/// );
/// assert_eq!(*extended, BTreeMap::from([("x", 1), ("a", 3)]));
/// ```
pub fn extend<'t, T, S>(target: &'t mut T, sources: &[&S]) -> &'t mut T
where
    T: Object + ?Sized,
    T::Key: Clone,
    T::Value: Clone,
    S: Mapping<Key = T::Key, Value = T::Value> + ?Sized,
{
    each(sources, |source, _, _| {
        each(*source, |value, position, _| {
            if let Position::Key(key) = position {
                target.assign(key.clone(), value.clone());
            }
        });
    });
    target
}

/// Copies the entries of each source whose key `target` does not have yet.
///
/// Existing entries are never overwritten, whatever their value. When
/// several sources provide the same key, the first one wins. Returns
/// `target` itself.
///
/// # Examples
///
/// ```rust
/// use collection_utils::object::defaults;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("a", 10), ("b", 0)]);
/// defaults(&mut target, &[&BTreeMap::from([("a", 1), ("b", 3), ("c", 4)])]);
/// assert_eq!(target, BTreeMap::from([("a", 10), ("b", 0), ("c", 4)]));
/// ```
pub fn defaults<'t, T, S>(target: &'t mut T, sources: &[&S]) -> &'t mut T
where
    T: Object + ?Sized,
    T::Key: Clone,
    T::Value: Clone,
    S: Mapping<Key = T::Key, Value = T::Value> + ?Sized,
{
    each(sources, |source, _, _| {
        each(*source, |value, position, _| {
            if let Position::Key(key) = position
                && target.is_vacant(key)
            {
                target.assign(key.clone(), value.clone());
            }
        });
    });
    target
}
