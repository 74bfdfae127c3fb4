//! Array-shape utilities.
//!
//! Operations on the shape of ordered sequences rather than their
//! contents: flattening nested structures, zipping parallel arrays into
//! tuples, set-style combination, random permutation, and positional
//! access. Each traverses through the collection engine's entry points.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::array::{difference, intersection, zip};
//!
//! assert_eq!(intersection(&[&[1, 2, 3], &[2, 3, 4], &[3, 4, 5]]), vec![3]);
//! assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4]]), vec![1, 3]);
//!
//! let zipped = zip(&[&['a', 'b'], &['c']]);
//! assert_eq!(zipped, vec![vec![Some('a'), Some('c')], vec![Some('b'), None]]);
//! ```

mod flatten;
mod sets;
mod shuffle;
mod take;
mod zip;

pub use flatten::{Nested, flatten};
pub use sets::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with};
pub use take::{first, first_n, last, last_n};
pub use zip::zip;
