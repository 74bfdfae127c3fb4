//! Flattening of arbitrarily nested sequences.
//!
//! [`Nested`] is the tagged tree the flattener walks: scalar leaves or a
//! sequence of further nodes, nested to any depth.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::array::{Nested, flatten};
//!
//! let nested = vec![
//!     Nested::from(1),
//!     Nested::from(vec![Nested::from(2), Nested::from(vec![Nested::from(3)])]),
//!     Nested::from(4),
//! ];
//! assert_eq!(flatten(&nested), vec![1.0, 2.0, 3.0, 4.0]);
//! ```

use crate::collection::Container;

/// A node in an arbitrarily nested sequence: a scalar leaf or a
/// sub-sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    /// A numeric leaf.
    Number(f64),
    /// A text leaf.
    Text(String),
    /// A boolean leaf.
    Bool(bool),
    /// A nested sub-sequence.
    Seq(Vec<Nested>),
}

impl From<f64> for Nested {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Nested {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Nested {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Nested {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Nested {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<Nested>> for Nested {
    fn from(value: Vec<Nested>) -> Self {
        Self::Seq(value)
    }
}

/// Flattens a nested sequence of any depth into a single sequence of
/// numbers.
///
/// Only numeric leaves are appended to the output; leaves of any other
/// type are silently dropped. The numeric filter is this function's
/// contract, quirks included: callers needing other leaf types must not
/// route them through here.
///
/// # Examples
///
/// ```rust
/// use lowbar::array::{Nested, flatten};
///
/// let mixed = vec![
///     Nested::from(1),
///     Nested::from("x"),
///     Nested::from(vec![Nested::from(2)]),
/// ];
/// // The text leaf disappears.
/// assert_eq!(flatten(&mixed), vec![1.0, 2.0]);
/// ```
pub fn flatten(nested: &[Nested]) -> Vec<f64> {
    let mut flat = Vec::new();
    descend(nested, &mut flat);
    flat
}

fn descend(level: &[Nested], flat: &mut Vec<f64>) {
    level.each(|node, _| match node {
        Nested::Number(value) => flat.push(*value),
        Nested::Seq(children) => descend(children, flat),
        Nested::Text(_) | Nested::Bool(_) => {}
    });
}
