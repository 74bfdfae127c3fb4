//! Rate-limiting decorator with leading and trailing calls.
//!
//! [`Throttle`] wraps a function so that at most one underlying
//! invocation happens per time window. The first call in an open field
//! fires immediately (the *leading* call) and starts the window; calls
//! arriving inside the window are suppressed, but their arguments are
//! remembered, and when the window elapses the most recent suppressed
//! arguments fire once (the *trailing* call), restarting the window.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::decorate::{Throttle, VirtualScheduler};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let calls = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&calls);
//! let throttled = Throttle::new(
//!     scheduler.clone(),
//!     move |n: i32| sink.borrow_mut().push(n),
//!     Duration::from_millis(100),
//! );
//!
//! throttled.call(1); // leading: fires immediately
//! throttled.call(2); // suppressed
//! throttled.call(3); // suppressed, replaces 2 as pending
//! assert_eq!(*calls.borrow(), vec![1]);
//!
//! scheduler.advance(Duration::from_millis(100));
//! assert_eq!(*calls.borrow(), vec![1, 3]); // trailing: most recent args
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::schedule::{Scheduler, TimerHandle};

/// Private throttle state, shared only with the trailing job.
struct ThrottleState<A, H> {
    /// Clock reading of the last actual invocation.
    last_invoked: Option<Duration>,
    /// Arguments of the most recent suppressed call.
    pending: Option<A>,
    /// Handle of the scheduled trailing job, if one is queued.
    timer: Option<H>,
}

/// A decorator allowing at most one invocation per `wait` window.
///
/// State is owned by this wrapper instance alone (and lent to the one
/// trailing job it schedules); wrapping a function twice yields two
/// independent throttles.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `A` - Its argument bundle (use a tuple for multiple arguments)
/// * `S` - The scheduler used for trailing calls and for the clock
///
/// # Thread Safety
///
/// NOT thread-safe; the shared state is reference-counted, not locked.
pub struct Throttle<F, A, S: Scheduler> {
    function: Rc<RefCell<F>>,
    state: Rc<RefCell<ThrottleState<A, S::Handle>>>,
    scheduler: S,
    wait: Duration,
}

impl<F, A, S> Throttle<F, A, S>
where
    S: Scheduler,
{
    /// Creates a throttled wrapper around `function` with the given
    /// window length.
    pub fn new(scheduler: S, function: F, wait: Duration) -> Self {
        Self {
            function: Rc::new(RefCell::new(function)),
            state: Rc::new(RefCell::new(ThrottleState {
                last_invoked: None,
                pending: None,
                timer: None,
            })),
            scheduler,
            wait,
        }
    }

    /// Returns whether a suppressed call is waiting for the trailing
    /// edge of the window.
    pub fn has_pending_call(&self) -> bool {
        self.state.borrow().pending.is_some()
    }
}

impl<F, A, S> Throttle<F, A, S>
where
    S: Scheduler + Clone + 'static,
    S::Handle: 'static,
    A: 'static,
{
    /// Calls through the throttle.
    ///
    /// Outside a window this invokes the wrapped function immediately
    /// and returns `Some` of its result. Inside a window the call is
    /// suppressed and returns `None`; its arguments become the pending
    /// arguments for the trailing call, replacing any earlier ones, and
    /// a single trailing job is scheduled for the window's end if none
    /// is queued yet. Trailing results are discarded.
    pub fn call<R>(&self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R + 'static,
    {
        let now = self.scheduler.now();
        let window_open = {
            let state = self.state.borrow();
            state
                .last_invoked
                .is_some_and(|last| now < last + self.wait)
        };

        if window_open {
            self.suppress(args, now);
            None
        } else {
            {
                let mut state = self.state.borrow_mut();
                if let Some(stale) = state.timer.take() {
                    stale.cancel();
                }
                state.pending = None;
                state.last_invoked = Some(now);
            }
            // Leading call, with no state borrow held.
            Some((&mut *self.function.borrow_mut())(args))
        }
    }

    /// Records a suppressed call and makes sure one trailing job is
    /// queued for the end of the current window.
    fn suppress<R>(&self, args: A, now: Duration)
    where
        F: FnMut(A) -> R + 'static,
    {
        let mut state = self.state.borrow_mut();
        state.pending = Some(args);

        if state.timer.is_some() {
            return;
        }

        let Some(last) = state.last_invoked else {
            unreachable!()
        };
        let remaining = last + self.wait - now;

        let function = Rc::clone(&self.function);
        let shared = Rc::clone(&self.state);
        let scheduler = self.scheduler.clone();
        state.timer = Some(self.scheduler.schedule_after(
            remaining,
            Box::new(move || {
                let taken = {
                    let mut state = shared.borrow_mut();
                    state.timer = None;
                    match state.pending.take() {
                        Some(args) => {
                            state.last_invoked = Some(scheduler.now());
                            Some(args)
                        }
                        None => None,
                    }
                };
                if let Some(args) = taken {
                    (&mut *function.borrow_mut())(args);
                }
            }),
        ));
    }
}

impl<F, A, S: Scheduler> fmt::Debug for Throttle<F, A, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("last_invoked", &state.last_invoked)
            .field("pending", &state.pending.is_some())
            .finish_non_exhaustive()
    }
}

// Reference-counted private state; single-threaded by contract.
static_assertions::assert_not_impl_any!(
    Throttle<fn(i32), i32, super::schedule::VirtualScheduler>: Send, Sync
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorate::VirtualScheduler;
    use rstest::rstest;
    use std::cell::Cell;

    fn counting_throttle(
        scheduler: &VirtualScheduler,
        wait_ms: u64,
    ) -> (Throttle<impl FnMut(i32) + use<>, i32, VirtualScheduler>, Rc<RefCell<Vec<i32>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let throttled = Throttle::new(
            scheduler.clone(),
            move |n: i32| sink.borrow_mut().push(n),
            Duration::from_millis(wait_ms),
        );
        (throttled, calls)
    }

    #[rstest]
    fn test_leading_call_fires_immediately() {
        let scheduler = VirtualScheduler::new();
        let (throttled, calls) = counting_throttle(&scheduler, 100);

        assert_eq!(throttled.call(1), Some(()));
        assert_eq!(*calls.borrow(), vec![1]);
    }

    #[rstest]
    fn test_calls_inside_window_are_suppressed() {
        let scheduler = VirtualScheduler::new();
        let (throttled, calls) = counting_throttle(&scheduler, 100);

        throttled.call(1);
        scheduler.advance(Duration::from_millis(10));
        assert_eq!(throttled.call(2), None);
        assert_eq!(throttled.call(3), None);
        assert_eq!(*calls.borrow(), vec![1]);
        assert!(throttled.has_pending_call());
    }

    #[rstest]
    fn test_trailing_call_uses_most_recent_arguments() {
        let scheduler = VirtualScheduler::new();
        let (throttled, calls) = counting_throttle(&scheduler, 100);

        throttled.call(1);
        scheduler.advance(Duration::from_millis(50));
        throttled.call(2);
        throttled.call(3);

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(*calls.borrow(), vec![1, 3]);
        assert!(!throttled.has_pending_call());
    }

    #[rstest]
    fn test_no_trailing_call_without_suppressed_calls() {
        let scheduler = VirtualScheduler::new();
        let (throttled, calls) = counting_throttle(&scheduler, 100);

        throttled.call(1);
        scheduler.advance(Duration::from_millis(500));
        assert_eq!(*calls.borrow(), vec![1]);
        assert_eq!(scheduler.pending_jobs(), 0);
    }

    #[rstest]
    fn test_call_after_quiet_window_is_leading_again() {
        let scheduler = VirtualScheduler::new();
        let (throttled, calls) = counting_throttle(&scheduler, 100);

        throttled.call(1);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(throttled.call(2), Some(()));
        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[rstest]
    fn test_trailing_call_restarts_the_window() {
        let scheduler = VirtualScheduler::new();
        let (throttled, calls) = counting_throttle(&scheduler, 100);

        throttled.call(1); // leading at t=0
        scheduler.advance(Duration::from_millis(60));
        throttled.call(2); // suppressed, trailing due at t=100

        scheduler.advance(Duration::from_millis(40)); // trailing fires at t=100
        assert_eq!(*calls.borrow(), vec![1, 2]);

        scheduler.advance(Duration::from_millis(50)); // t=150, still inside new window
        assert_eq!(throttled.call(3), None);
        scheduler.advance(Duration::from_millis(50)); // t=200, window ends, trailing fires
        assert_eq!(*calls.borrow(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_at_most_two_invocations_for_burst() {
        let scheduler = VirtualScheduler::new();
        let invocations = Rc::new(Cell::new(0));

        let sink = Rc::clone(&invocations);
        let throttled = Throttle::new(
            scheduler.clone(),
            move |_: ()| sink.set(sink.get() + 1),
            Duration::from_millis(100),
        );

        for _ in 0..5 {
            throttled.call(());
            scheduler.advance(Duration::from_millis(2));
        }
        assert_eq!(invocations.get(), 1);

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(invocations.get(), 2);
    }

    #[rstest]
    fn test_independent_throttle_instances() {
        let scheduler = VirtualScheduler::new();
        let (first, first_calls) = counting_throttle(&scheduler, 100);
        let (second, second_calls) = counting_throttle(&scheduler, 100);

        first.call(1);
        second.call(9);
        assert_eq!(*first_calls.borrow(), vec![1]);
        assert_eq!(*second_calls.borrow(), vec![9]);
    }
}
