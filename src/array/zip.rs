//! Zipping parallel arrays into index-aligned tuples.

use crate::collection::{Container, map};

/// Zips the input arrays into a sequence of index-aligned rows.
///
/// The output has one row per index up to the longest input's length;
/// row `i` holds element `i` of each array in argument order, with
/// `None` standing in for arrays too short to contribute.
///
/// # Examples
///
/// ```rust
/// use lowbar::array::zip;
///
/// let letters = ['a', 'b', 'c', 'd'];
/// let numbers = ['1', '2', '3'];
/// let rows = zip(&[&letters, &numbers]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some('a'), Some('1')],
///         vec![Some('b'), Some('2')],
///         vec![Some('c'), Some('3')],
///         vec![Some('d'), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(arrays: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = arrays.fold_left(0, |longest, array, _| longest.max(array.len()));
    (0..longest)
        .map(|index| map(arrays, |array| array.get(index).cloned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zip_pads_short_arrays() {
        let rows = zip(&[&["a", "b", "c", "d"][..], &["w", "x", "y"][..]]);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3], vec![Some("d"), None]);
    }

    #[rstest]
    fn zip_of_equal_lengths_has_no_padding() {
        let rows = zip(&[&[1, 2][..], &[3, 4][..]]);
        assert_eq!(rows, vec![vec![Some(1), Some(3)], vec![Some(2), Some(4)]]);
    }

    #[rstest]
    fn zip_with_no_arrays_is_empty() {
        let rows: Vec<Vec<Option<i32>>> = zip(&[]);
        assert!(rows.is_empty());
    }

    #[rstest]
    fn zip_row_order_follows_argument_order() {
        let rows = zip(&[&[10][..], &[20][..], &[30][..]]);
        assert_eq!(rows, vec![vec![Some(10), Some(20), Some(30)]]);
    }
}
