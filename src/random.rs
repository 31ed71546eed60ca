//! Random permutations.
//!
//! [`shuffle`] copies a sequence and permutes the copy with the
//! Fisher-Yates (Knuth) algorithm: walking `i` from the last index down to
//! `1`, it swaps element `i` with an element `j` drawn uniformly from
//! `0..=i`. Every permutation is equally likely and the input is never
//! touched.

use rand::Rng;

/// Returns a uniformly random permutation of `sequence`, using the
/// thread-local random number generator.
///
/// # Examples
///
/// ```rust
/// use collection_utils::random::shuffle;
///
/// let numbers = vec![4, 5, 6];
/// let mut shuffled = shuffle(&numbers);
///
/// assert_eq!(numbers, vec![4, 5, 6]);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, numbers);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a uniformly random permutation of `sequence`, drawing from
/// `rng`.
///
/// With a seeded generator the result is reproducible.
///
/// # Examples
///
/// ```rust
/// use collection_utils::random::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let letters = ['a', 'b', 'c', 'd'];
/// let first = shuffle_with(&letters, &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&letters, &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    for index in (1..shuffled.len()).rev() {
        let swap_index = rng.random_range(0..=index);
        shuffled.swap(index, swap_index);
    }
    shuffled
}
