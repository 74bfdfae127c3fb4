//! The traversal primitive shared by every combinator in the library.
//!
//! This module provides the [`Container`] trait, the single entry point for
//! walking a collection. Two shapes implement it: ordered sequences
//! (`[T]`, `Vec<T>`, keyed by index) and keyed mappings (`HashMap`,
//! `BTreeMap`, keyed by name). Every higher-level combinator is defined in
//! terms of [`Container::each`] and [`Container::fold_left`]; none of them
//! traverses a collection any other way.
//!
//! # Traversal contract
//!
//! - Every element (or entry) is visited exactly once per call.
//! - Sequence traversal strictly increases the index.
//! - Mapping enumeration order is unspecified.
//! - Traversal never short-circuits.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::collection::Container;
//!
//! let numbers = vec![1, 2, 3];
//! let sum = numbers.fold_left(0, |total, n, _| total + n);
//! assert_eq!(sum, 6);
//!
//! // Seedless reduction: the first element seeds the accumulator and is
//! // never passed to the closure.
//! let result = vec![5].reduce(|total, n, _| total + n * n);
//! assert_eq!(result, Ok(5));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::error::EmptyReductionError;

/// A traversable collection: an ordered sequence or a keyed mapping.
///
/// `Container` is the library's sole traversal primitive. Implementors
/// provide [`each`](Container::each); folding, reduction, and every
/// combinator in the crate are derived from it.
///
/// # Implementors
///
/// - `[T]` and `Vec<T>`: ordered sequences, `Key = usize`, visited in
///   strictly increasing index order
/// - `HashMap<K, V>`: keyed mapping, enumeration order unspecified
/// - `BTreeMap<K, V>`: keyed mapping; iteration happens to be sorted but
///   callers must not rely on any particular order
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::Container;
/// use std::collections::BTreeMap;
///
/// let mut visited = Vec::new();
/// vec!["a", "b"].each(|value, key| visited.push((*key, *value)));
/// assert_eq!(visited, vec![(0, "a"), (1, "b")]);
///
/// let mut mapping = BTreeMap::new();
/// mapping.insert("one", 1);
/// mapping.insert("two", 2);
/// assert_eq!(mapping.length(), 2);
/// ```
pub trait Container {
    /// The key under which an element is stored: an index for sequences,
    /// a name for mappings.
    type Key;

    /// The element type.
    type Item;

    /// Visits every element exactly once, invoking `visitor(value, key)`.
    ///
    /// Used purely for side effects; there is no return value and the
    /// traversal never short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::collection::Container;
    ///
    /// let mut log = Vec::new();
    /// vec![10, 20].each(|value, key| log.push(*value + *key as i32));
    /// assert_eq!(log, vec![10, 21]);
    /// ```
    fn each<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Item, &Self::Key);

    /// Folds every element into an accumulator, left to right, starting
    /// from an explicit initial value.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - Takes the accumulator, the element, and its key,
    ///   returning the next accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::collection::Container;
    ///
    /// let joined = vec!["a", "b", "c"]
    ///     .fold_left(String::new(), |acc, s, _| acc + *s);
    /// assert_eq!(joined, "abc");
    /// ```
    fn fold_left<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &Self::Item, &Self::Key) -> B,
    {
        let mut accumulator = Some(init);
        self.each(|value, key| {
            let Some(current) = accumulator.take() else {
                unreachable!()
            };
            accumulator = Some(function(current, value, key));
        });
        let Some(result) = accumulator else {
            unreachable!()
        };
        result
    }

    /// Folds every element into an accumulator seeded by the first visited
    /// element.
    ///
    /// The seeding element is never passed to `function`; the closure runs
    /// once per remaining element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyReductionError`] if the container is empty: with no
    /// initial value there is nothing to seed the accumulator with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::collection::{Container, EmptyReductionError};
    ///
    /// let largest = vec![3, 9, 4].reduce(|best, n, _| best.max(*n));
    /// assert_eq!(largest, Ok(9));
    ///
    /// let empty: Vec<i32> = Vec::new();
    /// assert_eq!(empty.reduce(|total, n, _| total + n), Err(EmptyReductionError));
    /// ```
    fn reduce<F>(&self, mut function: F) -> Result<Self::Item, EmptyReductionError>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, &Self::Item, &Self::Key) -> Self::Item,
    {
        let mut accumulator: Option<Self::Item> = None;
        self.each(|value, key| {
            accumulator = Some(match accumulator.take() {
                None => value.clone(),
                Some(current) => function(current, value, key),
            });
        });
        accumulator.ok_or(EmptyReductionError)
    }

    /// Counts the elements by traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::collection::Container;
    ///
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// ```
    fn length(&self) -> usize {
        self.fold_left(0, |count, _, _| count + 1)
    }

    /// Returns whether the container has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::collection::Container;
    ///
    /// let empty: Vec<i32> = Vec::new();
    /// assert!(Container::is_empty(&empty));
    /// ```
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

// =============================================================================
// Ordered Sequences
// =============================================================================

impl<T> Container for [T] {
    type Key = usize;
    type Item = T;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &usize),
    {
        for (index, value) in self.iter().enumerate() {
            visitor(value, &index);
        }
    }
}

impl<T> Container for Vec<T> {
    type Key = usize;
    type Item = T;

    fn each<F>(&self, visitor: F)
    where
        F: FnMut(&T, &usize),
    {
        self.as_slice().each(visitor);
    }
}

// =============================================================================
// Keyed Mappings
// =============================================================================

impl<K: Eq + Hash, V> Container for HashMap<K, V> {
    type Key = K;
    type Item = V;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&V, &K),
    {
        for (key, value) in self {
            visitor(value, key);
        }
    }
}

impl<K: Ord, V> Container for BTreeMap<K, V> {
    type Key = K;
    type Item = V;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&V, &K),
    {
        for (key, value) in self {
            visitor(value, key);
        }
    }
}
