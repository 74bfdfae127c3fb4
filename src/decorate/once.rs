//! Single-invocation decorator.
//!
//! [`Once`] wraps a function so that only the first call runs it; every
//! call, including the first, returns the result computed then. The
//! arguments of later calls are ignored.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::decorate::Once;
//! use std::cell::Cell;
//!
//! let runs = Cell::new(0);
//! let wrapped = Once::new(|n: i32| {
//!     runs.set(runs.get() + 1);
//!     n * 2
//! });
//!
//! assert_eq!(wrapped.call(21), 42);
//! assert_eq!(wrapped.call(999), 42); // ignored, replayed
//! assert_eq!(runs.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

/// The internal state of a [`Once`] wrapper.
///
/// Tracks whether the wrapped function is still waiting for its first
/// call, has produced its result, or panicked while running.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// The wrapped function has not been invoked yet.
    Armed(F),
    /// The wrapped function ran once; its result replays on every call.
    Done(R),
    /// The wrapped function panicked. The wrapper is now unusable.
    Poisoned,
}

/// A decorator that invokes its wrapped function at most one time.
///
/// The first call invokes the function with that call's arguments and
/// caches the result; every call returns a clone of that result. State
/// is private to this one wrapper instance; wrapping the same function
/// twice yields two independent single-call slots.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `A` - Its argument bundle (use a tuple for multiple arguments)
/// * `R` - Its result type; must be `Clone` so the cached result can be
///   handed out repeatedly
///
/// # Thread Safety
///
/// This type is NOT thread-safe; the library's execution model is
/// single-threaded and the state cell is deliberately `!Sync`.
///
/// # Examples
///
/// ```rust
/// use lowbar::decorate::Once;
///
/// let configure = Once::new(|name: &str| format!("configured {name}"));
/// assert_eq!(configure.call("db"), "configured db");
/// assert_eq!(configure.call("cache"), "configured db");
/// assert!(configure.was_invoked());
/// ```
pub struct Once<F, A, R> {
    state: RefCell<OnceState<F, R>>,
    _args: PhantomData<fn(A) -> R>,
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    /// Creates a new single-invocation wrapper around `function`.
    ///
    /// The function is not called until [`call`](Once::call).
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Armed(function)),
            _args: PhantomData,
        }
    }

    /// Invokes the wrapped function on the first call and replays the
    /// cached result on every call.
    ///
    /// Arguments of calls after the first are dropped unused.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics, the wrapper becomes poisoned
    ///   and all future calls panic.
    /// - If the wrapper is already poisoned.
    pub fn call(&self, args: A) -> R {
        // Short borrow to decide whether this is the first call, released
        // before the wrapped function runs.
        let needs_invocation = {
            let state = self.state.borrow();
            match &*state {
                OnceState::Done(_) => false,
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
                OnceState::Armed(_) => true,
            }
        };

        if needs_invocation {
            self.invoke_first(args);
        }

        match &*self.state.borrow() {
            OnceState::Done(result) => result.clone(),
            _ => unreachable!(),
        }
    }

    /// Runs the wrapped function exactly once.
    ///
    /// Takes the function out of the state, transitions to `Poisoned`,
    /// runs it, and transitions to `Done` on success. If the function
    /// panics the state stays `Poisoned`.
    fn invoke_first(&self, args: A) {
        let mut state = self.state.borrow_mut();

        match &*state {
            OnceState::Done(_) => return,
            OnceState::Poisoned => panic!("Once instance has been poisoned"),
            OnceState::Armed(_) => {}
        }

        let OnceState::Armed(function) = std::mem::replace(&mut *state, OnceState::Poisoned)
        else {
            unreachable!()
        };

        let result = function(args);

        *state = OnceState::Done(result);
    }
}

impl<F, A, R> Once<F, A, R> {
    /// Returns whether the wrapped function has run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::decorate::Once;
    ///
    /// let wrapped = Once::new(|(): ()| 7);
    /// assert!(!wrapped.was_invoked());
    /// wrapped.call(());
    /// assert!(wrapped.was_invoked());
    /// ```
    #[inline]
    pub fn was_invoked(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Done(_))
    }

    /// Returns whether the wrapper has been poisoned by a panic in the
    /// wrapped function.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            OnceState::Done(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Armed(_) => formatter.debug_tuple("Once").field(&"<armed>").finish(),
            OnceState::Poisoned => formatter.debug_tuple("Once").field(&"<poisoned>").finish(),
        }
    }
}

// The state cell is single-owner by contract.
static_assertions::assert_not_impl_any!(Once<fn(i32) -> i32, i32, i32>: Sync);
