//! Random permutation.

use rand::Rng;

/// Returns a new sequence holding every element of `array` exactly once,
/// in a uniformly random order. The input is not modified.
///
/// Uses the thread-local generator; see [`shuffle_with`] to supply one.
///
/// # Examples
///
/// ```rust
/// use lowbar::array::shuffle;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&original);
/// assert_eq!(original, vec![1, 2, 3, 4, 5]);
///
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(array: &[T]) -> Vec<T> {
    shuffle_with(array, &mut rand::rng())
}

/// [`shuffle`] with a caller-supplied random generator.
///
/// A Fisher–Yates pass over a copy of the input: positions are swapped
/// from the back with a uniformly chosen earlier position, giving every
/// permutation equal probability.
///
/// # Examples
///
/// ```rust
/// use lowbar::array::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let once = shuffle_with(&[1, 2, 3], &mut rng);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let again = shuffle_with(&[1, 2, 3], &mut rng);
/// assert_eq!(once, again);
/// ```
pub fn shuffle_with<T: Clone, R: Rng>(array: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = array.to_vec();
    for index in (1..shuffled.len()).rev() {
        let other = rng.random_range(0..=index);
        shuffled.swap(index, other);
    }
    shuffled
}
