//! The scheduler seam and deferred invocation.
//!
//! The library never blocks or spawns threads: anything time-based goes
//! through the [`Scheduler`] trait, an external collaborator that runs a
//! job after a duration and reports a monotonic clock. [`delay`] defers a
//! single invocation through it; [`Throttle`](super::Throttle) schedules
//! its trailing calls on it.
//!
//! [`VirtualScheduler`] is the crate's deterministic implementation: a
//! timer queue against a manually advanced clock, suitable both for
//! embedding in single-threaded applications that drive their own time
//! and for tests.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::decorate::{VirtualScheduler, delay};
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let fired = Rc::new(Cell::new(0));
//!
//! let sink = Rc::clone(&fired);
//! delay(&scheduler, move |n: i32| sink.set(n), Duration::from_millis(500), 7);
//!
//! scheduler.advance(Duration::from_millis(499));
//! assert_eq!(fired.get(), 0);
//! scheduler.advance(Duration::from_millis(1));
//! assert_eq!(fired.get(), 7);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// A cancellable token for a scheduled pending invocation.
pub trait TimerHandle {
    /// Cancels the scheduled job. Cancelling an already-run or
    /// already-cancelled job is a no-op.
    fn cancel(&self);

    /// Returns whether the job is still waiting to run.
    fn is_pending(&self) -> bool;
}

/// The external timing collaborator.
///
/// Implementations run submitted jobs after a requested duration and
/// expose a monotonic clock. Nothing in this library assumes anything
/// else about how time advances.
pub trait Scheduler {
    /// The handle type returned for every scheduled job.
    type Handle: TimerHandle;

    /// Schedules `job` to run once, `wait` from now. Returns immediately
    /// with a cancellable handle.
    fn schedule_after(&self, wait: Duration, job: Box<dyn FnOnce()>) -> Self::Handle;

    /// The monotonic clock: time elapsed since the scheduler's origin.
    fn now(&self) -> Duration;
}

/// Schedules a single invocation of `function(args)` after `wait`.
///
/// Returns the scheduler's handle immediately without blocking; the
/// function's return value is discarded when the job eventually runs.
/// Cancellation goes through the returned handle.
///
/// # Examples
///
/// ```rust
/// use lowbar::decorate::{TimerHandle, VirtualScheduler, delay};
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let handle = delay(&scheduler, |msg: &str| println!("{msg}"), Duration::from_secs(1), "hi");
/// assert!(handle.is_pending());
///
/// handle.cancel();
/// scheduler.advance(Duration::from_secs(2));
/// assert!(!handle.is_pending());
/// ```
pub fn delay<S, F, A, R>(scheduler: &S, function: F, wait: Duration, args: A) -> S::Handle
where
    S: Scheduler,
    F: FnOnce(A) -> R + 'static,
    A: 'static,
{
    scheduler.schedule_after(
        wait,
        Box::new(move || {
            function(args);
        }),
    )
}

struct ScheduledJob {
    id: u64,
    due: Duration,
    job: Option<Box<dyn FnOnce()>>,
}

struct SchedulerCore {
    clock: Duration,
    next_id: u64,
    queue: Vec<ScheduledJob>,
}

impl SchedulerCore {
    fn cancel(&mut self, id: u64) {
        self.queue.retain(|entry| entry.id != id);
    }

    fn is_pending(&self, id: u64) -> bool {
        self.queue.iter().any(|entry| entry.id == id)
    }

    /// Index of the next due entry: earliest due time, scheduling order
    /// breaking ties.
    fn next_due(&self, target: Duration) -> Option<usize> {
        let mut next: Option<usize> = None;
        for (index, entry) in self.queue.iter().enumerate() {
            if entry.due > target {
                continue;
            }
            next = match next {
                Some(best)
                    if (self.queue[best].due, self.queue[best].id) <= (entry.due, entry.id) =>
                {
                    Some(best)
                }
                _ => Some(index),
            };
        }
        next
    }
}

/// A deterministic, manually driven scheduler.
///
/// Jobs run only inside [`advance`](VirtualScheduler::advance), in due
/// order, with the clock set to each job's due time as it runs. Cloning
/// yields another handle to the same queue and clock.
///
/// # Examples
///
/// ```rust
/// use lowbar::decorate::{Scheduler, VirtualScheduler};
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// assert_eq!(scheduler.now(), Duration::ZERO);
///
/// scheduler.advance(Duration::from_millis(250));
/// assert_eq!(scheduler.now(), Duration::from_millis(250));
/// ```
#[derive(Clone)]
pub struct VirtualScheduler {
    core: Rc<RefCell<SchedulerCore>>,
}

impl VirtualScheduler {
    /// Creates a scheduler with an empty queue and the clock at zero.
    pub fn new() -> Self {
        Self {
            core: Rc::new(RefCell::new(SchedulerCore {
                clock: Duration::ZERO,
                next_id: 0,
                queue: Vec::new(),
            })),
        }
    }

    /// Advances the clock by `elapsed`, running every job that falls due,
    /// in due order.
    ///
    /// A job scheduled by another job still runs in this pass if its due
    /// time lands inside the window. While a job runs, [`now`](Scheduler::now)
    /// reports that job's due time.
    pub fn advance(&self, elapsed: Duration) {
        let target = self.core.borrow().clock + elapsed;
        loop {
            let due_job = {
                let mut core = self.core.borrow_mut();
                match core.next_due(target) {
                    None => {
                        core.clock = target;
                        break;
                    }
                    Some(index) => {
                        let mut entry = core.queue.remove(index);
                        core.clock = core.clock.max(entry.due);
                        entry.job.take()
                    }
                }
            };
            // Run with no borrow held: the job may schedule or cancel.
            if let Some(job) = due_job {
                job();
            }
        }
    }

    /// Returns how many jobs are waiting to run.
    pub fn pending_jobs(&self) -> usize {
        self.core.borrow().queue.len()
    }
}

impl Default for VirtualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.core.borrow();
        formatter
            .debug_struct("VirtualScheduler")
            .field("clock", &core.clock)
            .field("pending_jobs", &core.queue.len())
            .finish()
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = VirtualHandle;

    fn schedule_after(&self, wait: Duration, job: Box<dyn FnOnce()>) -> VirtualHandle {
        let mut core = self.core.borrow_mut();
        let id = core.next_id;
        core.next_id += 1;
        let due = core.clock + wait;
        core.queue.push(ScheduledJob {
            id,
            due,
            job: Some(job),
        });
        VirtualHandle {
            id,
            core: Rc::downgrade(&self.core),
        }
    }

    fn now(&self) -> Duration {
        self.core.borrow().clock
    }
}

/// Handle for a job scheduled on a [`VirtualScheduler`].
pub struct VirtualHandle {
    id: u64,
    core: Weak<RefCell<SchedulerCore>>,
}

impl TimerHandle for VirtualHandle {
    fn cancel(&self) {
        if let Some(core) = self.core.upgrade() {
            core.borrow_mut().cancel(self.id);
        }
    }

    fn is_pending(&self) -> bool {
        self.core
            .upgrade()
            .is_some_and(|core| core.borrow().is_pending(self.id))
    }
}

impl fmt::Debug for VirtualHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("VirtualHandle")
            .field("id", &self.id)
            .field("pending", &self.is_pending())
            .finish()
    }
}
