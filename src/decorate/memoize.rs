//! Per-argument-list caching decorator.
//!
//! [`Memoize`] is [`Once`](super::Once) generalized over argument lists:
//! the wrapped function runs once per structurally distinct argument
//! list, and later calls with equal arguments replay the cached result.
//!
//! Cache keys are the structural serialization of the arguments, so two
//! call sites passing structurally equal but separately constructed
//! values hit the same entry. Argument lists that cannot be serialized
//! (cyclic or non-primitive-keyed structures) fail the call instead of
//! silently bypassing the cache.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::decorate::Memoize;
//! use std::cell::Cell;
//!
//! let runs = Cell::new(0);
//! let add = Memoize::new(|(a, b): &(i32, i32)| {
//!     runs.set(runs.get() + 1);
//!     a + b
//! });
//!
//! assert_eq!(add.call(&(1, 2)).unwrap(), 3);
//! assert_eq!(add.call(&(1, 2)).unwrap(), 3); // cache hit
//! assert_eq!(add.call(&(2, 1)).unwrap(), 3); // different key
//! assert_eq!(runs.get(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use super::error::SerializationError;

/// A decorator that caches results per structurally distinct argument
/// list.
///
/// The cache is private to this wrapper instance and keyed by the JSON
/// encoding of the argument bundle. Only primitive-valued argument lists
/// are guaranteed collision-free: values that serialize identically
/// share an entry by design, and values without a serialization fail the
/// call.
///
/// # Type Parameters
///
/// * `F` - The wrapped function, called with a reference to the argument
///   bundle
/// * `A` - The argument bundle; must be `Serialize`
/// * `R` - The result type; must be `Clone` to replay cached results
///
/// # Thread Safety
///
/// NOT thread-safe; cache and function live in `!Sync` cells.
///
/// # Examples
///
/// ```rust
/// use lowbar::decorate::Memoize;
///
/// let describe = Memoize::new(|n: &u32| format!("value {n}"));
/// assert_eq!(describe.call(&7).unwrap(), "value 7");
/// assert_eq!(describe.cached_calls(), 1);
/// ```
pub struct Memoize<F, A, R> {
    function: RefCell<F>,
    cache: RefCell<HashMap<String, R>>,
    _args: PhantomData<fn(&A) -> R>,
}

impl<F, A, R> Memoize<F, A, R>
where
    F: FnMut(&A) -> R,
    A: Serialize,
    R: Clone,
{
    /// Creates a new memoizing wrapper with an empty cache.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function: RefCell::new(function),
            cache: RefCell::new(HashMap::new()),
            _args: PhantomData,
        }
    }

    /// Invokes the wrapped function on the first occurrence of the
    /// arguments' cache key and replays the cached result thereafter.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] when the arguments have no
    /// serialization; the wrapped function is not run in that case.
    pub fn call(&self, args: &A) -> Result<R, SerializationError> {
        let key = serde_json::to_string(args).map_err(SerializationError::new)?;

        if let Some(hit) = self.cache.borrow().get(&key) {
            return Ok(hit.clone());
        }

        let result = (&mut *self.function.borrow_mut())(args);
        self.cache.borrow_mut().insert(key, result.clone());
        Ok(result)
    }

    /// Returns how many distinct argument lists have been cached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::decorate::Memoize;
    ///
    /// let square = Memoize::new(|n: &i32| n * n);
    /// square.call(&2).unwrap();
    /// square.call(&2).unwrap();
    /// square.call(&3).unwrap();
    /// assert_eq!(square.cached_calls(), 2);
    /// ```
    #[inline]
    pub fn cached_calls(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<F, A, R> fmt::Debug for Memoize<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached_calls", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

// The cache cell is single-owner by contract.
static_assertions::assert_not_impl_any!(Memoize<fn(&i32) -> i32, i32, i32>: Sync);
