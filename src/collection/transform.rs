//! Transformation combinators.
//!
//! [`map`] and [`pluck`] build new sequences from a traversal; [`sort_by`]
//! reorders a sequence in place; [`invoke`] calls a method or function
//! against every element. The string-or-function arguments of the source
//! API are rendered as tagged variants: [`Criterion`] for sorting,
//! [`Invocable`] for invocation.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::collection::map;
//!
//! let lengths = map(&vec!["a", "bc", "def"], |s| s.len());
//! assert_eq!(lengths, vec![1, 2, 3]);
//! ```

use std::cmp::Ordering;

use super::container::Container;
use super::error::MethodNotFoundError;

/// Returns a new sequence of `function(value)` results, one per element,
/// in traversal order.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::map;
///
/// let doubled = map(&vec![1, 2, 3], |n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<C, B, F>(collection: &C, mut function: F) -> Vec<B>
where
    C: Container + ?Sized,
    F: FnMut(&C::Item) -> B,
{
    collection.fold_left(Vec::new(), |mut mapped, value, _| {
        mapped.push(function(value));
        mapped
    })
}

/// An element with named fields.
///
/// The seam behind [`pluck`] and field-criterion [`sort_by`]: an
/// implementor exposes its fields by name, answering `None` for names it
/// does not carry.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::Record;
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl Record for Point {
///     type Field = f64;
///
///     fn field(&self, name: &str) -> Option<f64> {
///         match name {
///             "x" => Some(self.x),
///             "y" => Some(self.y),
///             _ => None,
///         }
///     }
/// }
///
/// let point = Point { x: 1.0, y: 2.0 };
/// assert_eq!(point.field("y"), Some(2.0));
/// assert_eq!(point.field("z"), None);
/// ```
pub trait Record {
    /// The field value type.
    type Field;

    /// Returns the named field, or `None` if this record does not have it.
    fn field(&self, name: &str) -> Option<Self::Field>;
}

/// [`map`] specialized to extract the named field from each element.
///
/// Elements missing the field contribute `None`.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::{Record, pluck};
///
/// struct Person {
///     age: f64,
/// }
///
/// impl Record for Person {
///     type Field = f64;
///
///     fn field(&self, name: &str) -> Option<f64> {
///         (name == "age").then_some(self.age)
///     }
/// }
///
/// let people = vec![Person { age: 30.0 }, Person { age: 40.0 }];
/// assert_eq!(pluck(&people, "age"), vec![Some(30.0), Some(40.0)]);
/// assert_eq!(pluck(&people, "name"), vec![None, None]);
/// ```
pub fn pluck<C>(collection: &C, name: &str) -> Vec<Option<<C::Item as Record>::Field>>
where
    C: Container + ?Sized,
    C::Item: Record,
{
    map(collection, |value| value.field(name))
}

/// How [`sort_by`] ranks an element: by a named numeric field or by a
/// caller-supplied ranking function.
#[derive(Clone, Copy)]
pub enum Criterion<'a, T> {
    /// Rank by the named field, converted to `f64`. An element missing
    /// the field ranks as `NaN`.
    Field(&'a str),
    /// Rank by the function's return value.
    By(&'a dyn Fn(&T) -> f64),
}

/// Sorts the sequence **in place** by the criterion's numeric rank and
/// returns the same slice (shared mutation, not a copy).
///
/// Elements are compared by the difference of their ranks. `NaN` ranks
/// (missing fields, caller-produced `NaN`) compare as equal to
/// everything, so their relative order is unspecified by contract.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::{Criterion, Record, sort_by};
///
/// #[derive(Debug, PartialEq)]
/// struct Person {
///     age: u32,
/// }
///
/// impl Record for Person {
///     type Field = u32;
///
///     fn field(&self, name: &str) -> Option<u32> {
///         (name == "age").then_some(self.age)
///     }
/// }
///
/// let mut people = vec![Person { age: 40 }, Person { age: 25 }];
/// sort_by(&mut people, Criterion::Field("age"));
/// assert_eq!(people, vec![Person { age: 25 }, Person { age: 40 }]);
///
/// sort_by(&mut people, Criterion::By(&|p: &Person| -(f64::from(p.age))));
/// assert_eq!(people, vec![Person { age: 40 }, Person { age: 25 }]);
/// ```
pub fn sort_by<'c, T>(collection: &'c mut [T], criterion: Criterion<'_, T>) -> &'c mut [T]
where
    T: Record,
    T::Field: Into<f64>,
{
    let rank = |value: &T| -> f64 {
        match criterion {
            Criterion::Field(name) => value.field(name).map_or(f64::NAN, Into::into),
            Criterion::By(function) => function(value),
        }
    };
    collection.sort_by(|x, y| {
        (rank(x) - rank(y))
            .partial_cmp(&0.0)
            .unwrap_or(Ordering::Equal)
    });
    collection
}

/// What [`invoke`] calls on each element: a named method dispatched
/// through [`Dispatch`], or a function with the element as receiver.
pub enum Invocable<'a, T: Dispatch> {
    /// Call the method of this name on every element.
    Method(&'a str),
    /// Call this function with every element as the receiver.
    Callable(&'a dyn Fn(&T, &T::Args) -> T::Output),
}

/// An element answering method calls by name.
///
/// The seam behind [`Invocable::Method`]: an implementor routes a method
/// name and an argument bundle to the matching behavior, answering
/// `None` for names it does not know.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::Dispatch;
///
/// struct Rect {
///     width: f64,
///     height: f64,
/// }
///
/// impl Dispatch for Rect {
///     type Args = f64;
///     type Output = f64;
///
///     fn dispatch(&self, method: &str, scale: &f64) -> Option<f64> {
///         match method {
///             "area" => Some(self.width * self.height * scale),
///             "perimeter" => Some(2.0 * (self.width + self.height) * scale),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Dispatch {
    /// The argument bundle every call receives.
    type Args;

    /// The result type of a call.
    type Output;

    /// Runs the named method with `args`, or returns `None` when this
    /// element has no method of that name.
    fn dispatch(&self, method: &str, args: &Self::Args) -> Option<Self::Output>;
}

/// Calls `target` on every element with `args` and collects the results
/// in traversal order.
///
/// # Errors
///
/// Returns [`MethodNotFoundError`] if a named method is absent on any
/// element. The traversal still visits the remaining elements; the error
/// is sticky.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::{Dispatch, Invocable, invoke};
///
/// struct Counter(i64);
///
/// impl Dispatch for Counter {
///     type Args = i64;
///     type Output = i64;
///
///     fn dispatch(&self, method: &str, step: &i64) -> Option<i64> {
///         (method == "bump").then(|| self.0 + step)
///     }
/// }
///
/// let counters = vec![Counter(1), Counter(2)];
/// let bumped = invoke(&counters, Invocable::Method("bump"), &10);
/// assert_eq!(bumped.unwrap(), vec![11, 12]);
///
/// let squared = invoke(
///     &counters,
///     Invocable::Callable(&|counter: &Counter, _| counter.0 * counter.0),
///     &0,
/// );
/// assert_eq!(squared.unwrap(), vec![1, 4]);
/// ```
pub fn invoke<C>(
    collection: &C,
    target: Invocable<'_, C::Item>,
    args: &<C::Item as Dispatch>::Args,
) -> Result<Vec<<C::Item as Dispatch>::Output>, MethodNotFoundError>
where
    C: Container + ?Sized,
    C::Item: Dispatch,
{
    collection.fold_left(Ok(Vec::new()), |outcome, value, _| {
        let mut results = outcome?;
        match &target {
            Invocable::Method(name) => match value.dispatch(name, args) {
                Some(result) => results.push(result),
                None => {
                    return Err(MethodNotFoundError {
                        method: (*name).to_string(),
                    });
                }
            },
            Invocable::Callable(function) => results.push(function(value, args)),
        }
        Ok(results)
    })
}
