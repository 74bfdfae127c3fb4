//! Function decorators: wrappers that alter invocation semantics.
//!
//! Each decorator owns its private state exclusively; two separately
//! created wrappers never share anything, even when they wrap the same
//! underlying function. None of them is thread-safe, matching the
//! library's single-threaded execution model.
//!
//! - [`Once`]: invoke the wrapped function at most one time, replaying the
//!   first result forever after
//! - [`Memoize`]: invoke once per structurally distinct argument list
//! - [`delay`]: schedule a single deferred invocation on a [`Scheduler`]
//! - [`Throttle`]: allow at most one invocation per time window, with a
//!   leading call and a trailing call for the most recent suppressed
//!   arguments
//!
//! # Examples
//!
//! ```rust
//! use lowbar::decorate::Once;
//!
//! let wrapped = Once::new(|(a, b): (i32, i32)| a + b);
//! assert_eq!(wrapped.call((1, 2)), 3);
//! // Arguments of later calls are ignored; the first result replays.
//! assert_eq!(wrapped.call((100, 200)), 3);
//! ```

mod error;
mod memoize;
mod once;
mod schedule;
mod throttle;

pub use error::SerializationError;
pub use memoize::Memoize;
pub use once::{Once, OnceState};
pub use schedule::{Scheduler, TimerHandle, VirtualHandle, VirtualScheduler, delay};
pub use throttle::Throttle;
