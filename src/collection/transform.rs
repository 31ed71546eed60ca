//! Transformations built on [`each`]: mapping, folding, and selection.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use super::{Collection, Position, each};

/// Returns `callback(value, position, collection)` for every element, in
/// [`each`] order.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::map;
/// use std::collections::BTreeMap;
///
/// let doubled = map(&[1, 2, 3], |value, _, _| value * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// let prices = BTreeMap::from([("apple", 3), ("pear", 4)]);
/// let labels = map(&prices, |price, position, _| {
///     format!("{}={price}", position.key().unwrap())
/// });
/// assert_eq!(labels, vec!["apple=3", "pear=4"]);
/// ```
pub fn map<'a, C, U, F>(collection: &'a C, mut callback: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, Position<'a, C::Key>, &'a C) -> U,
{
    let mut results = Vec::new();
    each(collection, |value, position, collection| {
        results.push(callback(value, position, collection));
    });
    results
}

/// Keyed field access, used by [`pluck`].
///
/// Returns `None` when the element has no such field.
pub trait Field<Q: ?Sized> {
    /// Type of the field value.
    type Output: ?Sized;

    /// Looks up the field named by `key`.
    fn field(&self, key: &Q) -> Option<&Self::Output>;
}

impl<K, V, S, Q> Field<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn field(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Field<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn field(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<T> Field<usize> for [T] {
    type Output = T;

    fn field(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Field<usize> for Vec<T> {
    type Output = T;

    fn field(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T, const N: usize> Field<usize> for [T; N] {
    type Output = T;

    fn field(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

#[cfg(feature = "serde")]
impl Field<str> for serde_json::Value {
    type Output = Self;

    fn field(&self, key: &str) -> Option<&Self> {
        self.get(key)
    }
}

#[cfg(feature = "serde")]
impl Field<usize> for serde_json::Value {
    type Output = Self;

    fn field(&self, key: &usize) -> Option<&Self> {
        self.get(*key)
    }
}

#[cfg(feature = "serde")]
impl Field<str> for serde_json::Map<String, serde_json::Value> {
    type Output = serde_json::Value;

    fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.get(key)
    }
}

/// Extracts the field `key` from every element.
///
/// Elements lacking the field produce `None`.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::pluck;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name", "moe"), ("age", "30")]),
///     HashMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(&"30"), None]);
/// ```
pub fn pluck<'a, C, Q>(
    collection: &'a C,
    key: &Q,
) -> Vec<Option<&'a <C::Value as Field<Q>>::Output>>
where
    C: Collection + ?Sized,
    C::Value: Field<Q>,
    Q: ?Sized,
{
    map(collection, |value, _, _| value.field(key))
}

/// Folds the collection left to right, starting from `initial`.
///
/// The callback receives `(accumulator, value, position, collection)` and
/// returns the next accumulator.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::fold;
///
/// let sum = fold(&[1, 2, 3], 10, |sum, value, _, _| sum + value);
/// assert_eq!(sum, 16);
/// ```
pub fn fold<'a, C, A, F>(collection: &'a C, initial: A, mut callback: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &'a C::Value, Position<'a, C::Key>, &'a C) -> A,
{
    let mut accumulator = Some(initial);
    each(collection, |value, position, collection| {
        accumulator = accumulator
            .take()
            .map(|current| callback(current, value, position, collection));
    });
    match accumulator {
        Some(result) => result,
        None => unreachable!("accumulator is restored after every callback"),
    }
}

/// Folds the collection left to right with an optional initial value.
///
/// `None` means "no initial value": the first element (converted with
/// [`Into`]) seeds the accumulator and is not passed to the callback. An
/// empty collection without an initial value yields `None`; with an initial
/// value the result is always `Some`.
///
/// The `Into<A>` bound holds even when an initial value is given. To fold
/// into an accumulator the elements do not convert to, use [`fold`].
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::reduce;
///
/// let product = reduce(&[2, 3, 4], |product, value, _, _| product * value, None::<i32>);
/// assert_eq!(product, Some(24));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(reduce(&empty, |sum, value, _, _| sum + value, None::<i32>), None);
/// assert_eq!(reduce(&empty, |sum, value, _, _| sum + value, Some(0)), Some(0));
/// ```
pub fn reduce<'a, C, A, F>(collection: &'a C, mut callback: F, initial: Option<A>) -> Option<A>
where
    C: Collection + ?Sized,
    C::Value: Clone + Into<A>,
    F: FnMut(A, &'a C::Value, Position<'a, C::Key>, &'a C) -> A,
{
    let mut accumulator = initial;
    each(collection, |value, position, collection| {
        accumulator = Some(match accumulator.take() {
            None => value.clone().into(),
            Some(current) => callback(current, value, position, collection),
        });
    });
    accumulator
}

/// Returns the elements accepted by `predicate`, in order.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
/// assert_eq!(evens, vec![&2, &4, &6]);
/// ```
pub fn filter<'a, C, P>(collection: &'a C, mut predicate: P) -> Vec<&'a C::Value>
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    let mut kept = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value) {
            kept.push(value);
        }
    });
    kept
}

/// Returns the elements rejected by `predicate`, in order.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
/// assert_eq!(odds, vec![&1, &3, &5]);
/// ```
pub fn reject<'a, C, P>(collection: &'a C, mut predicate: P) -> Vec<&'a C::Value>
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Removes duplicates, keeping the first occurrence of each element.
///
/// Elements are compared by their [`Display`] rendering, so distinct values
/// that print the same collapse into one.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![&1, &2, &3]);
/// ```
pub fn uniq<C>(collection: &C) -> Vec<&C::Value>
where
    C: Collection + ?Sized,
    C::Value: Display,
{
    let mut seen = HashSet::new();
    filter(collection, |value| seen.insert(value.to_string()))
}
