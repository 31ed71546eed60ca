//! Membership tests and sequence slicing.

use super::{Collection, Position, each, fold};

/// Returns `true` if any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::contains;
/// use std::collections::HashMap;
///
/// assert!(contains(&[1, 2, 3], &3));
/// assert!(!contains(&vec!["a".to_string()], "b"));
/// assert!(contains(&HashMap::from([("key", 10)]), &10));
/// ```
pub fn contains<C, T>(collection: &C, target: &T) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq<T>,
    T: ?Sized,
{
    fold(collection, false, |found, value, _, _| found || value == target)
}

/// Returns `true` if `predicate` accepts every element.
///
/// An empty collection is vacuously accepted.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::every;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 3, 6], |value| value % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    fold(collection, true, |all_passed, value, _, _| {
        all_passed && predicate(value)
    })
}

/// Returns `true` if `predicate` accepts at least one element.
///
/// An empty collection is never accepted.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::some;
///
/// assert!(some(&[1, 3, 4], |value| value % 2 == 0));
/// assert!(!some(&[1, 3, 5], |value| value % 2 == 0));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    fold(collection, false, |any_passed, value, _, _| {
        any_passed || predicate(value)
    })
}

/// Returns the first index at or after `from_index` whose element equals
/// `target`, or `None` when there is no such element.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::index_of;
///
/// let letters = ["a", "b", "a", "c"];
/// assert_eq!(index_of(&letters, &"a", 0), Some(0));
/// assert_eq!(index_of(&letters, &"a", 1), Some(2));
/// assert_eq!(index_of(&letters, &"z", 0), None);
/// ```
pub fn index_of<T>(sequence: &[T], target: &T, from_index: usize) -> Option<usize>
where
    T: PartialEq,
{
    let mut found = None;
    each(sequence, |item, position, _| {
        if let Position::Index(index) = position
            && found.is_none()
            && index >= from_index
            && item == target
        {
            found = Some(index);
        }
    });
    found
}

/// Returns the first element of a sequence.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::first;
///
/// assert_eq!(first(&[3, 2, 1]), Some(&3));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub const fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns up to the first `count` elements of a sequence.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3, 4], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2], 5), &[1, 2]);
/// assert!(first_n(&[1, 2], 0).is_empty());
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element of a sequence.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::last;
///
/// assert_eq!(last(&[3, 2, 1]), Some(&1));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub const fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns up to the last `count` elements of a sequence.
///
/// # Examples
///
/// ```rust
/// use collection_utils::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3, 4], 2), &[3, 4]);
/// assert_eq!(last_n(&[1, 2], 5), &[1, 2]);
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}
