//! Set-style combination of arrays.
//!
//! Membership is plain `==` equality; results keep the first array's
//! encounter order and its duplicates. Inputs are explicit slices of
//! arrays rather than a variadic surface.

use crate::collection::{contains, every, filter, some};

/// Returns every element of the first array that appears in all of the
/// other arrays, in first-array order.
///
/// With no input arrays the result is empty.
///
/// # Examples
///
/// ```rust
/// use lowbar::array::intersection;
///
/// let shared = intersection(&[&[1, 2, 3], &[2, 3, 4], &[3, 4, 5]]);
/// assert_eq!(shared, vec![3]);
/// ```
pub fn intersection<T>(arrays: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    match arrays.split_first() {
        None => Vec::new(),
        Some((head, rest)) => filter(*head, |item| every(rest, |other| contains(*other, item))),
    }
}

/// Returns every element of `array` that appears in none of `others`,
/// in order.
///
/// # Examples
///
/// ```rust
/// use lowbar::array::difference;
///
/// let rest = difference(&[1, 2, 3, 4], &[&[2], &[4]]);
/// assert_eq!(rest, vec![1, 3]);
/// ```
pub fn difference<T>(array: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    filter(array, |item| !some(others, |other| contains(*other, item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn intersection_requires_membership_in_every_array() {
        // 2 is missing from the last array; only 3 survives.
        let shared = intersection(&[&[1, 2, 3][..], &[2, 3, 4][..], &[3, 4, 5][..]]);
        assert_eq!(shared, vec![3]);
    }

    #[rstest]
    fn intersection_keeps_first_array_order() {
        let shared = intersection(&[&[3, 1, 2][..], &[1, 2, 3][..]]);
        assert_eq!(shared, vec![3, 1, 2]);
    }

    #[rstest]
    fn intersection_of_single_array_is_a_copy() {
        assert_eq!(intersection(&[&[1, 2][..]]), vec![1, 2]);
    }

    #[rstest]
    fn intersection_of_nothing_is_empty() {
        assert_eq!(intersection::<i32>(&[]), Vec::<i32>::new());
    }

    #[rstest]
    fn difference_removes_members_of_any_other() {
        let rest = difference(&[1, 2, 3, 4], &[&[2, 4][..]]);
        assert_eq!(rest, vec![1, 3]);
    }

    #[rstest]
    fn difference_with_no_others_copies_the_array() {
        assert_eq!(difference(&["a", "b"], &[]), vec!["a", "b"]);
    }

    #[rstest]
    fn difference_keeps_duplicates_of_survivors() {
        let rest = difference(&[1, 1, 2], &[&[2][..]]);
        assert_eq!(rest, vec![1, 1]);
    }
}
