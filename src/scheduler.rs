//! The execution context used by time-based sources.
//!
//! A [`Scheduler`] runs a task once after an optional delay, or repeatedly on
//! a fixed period. Both return a [`TaskHandle`]; unsubscribing it aborts the
//! task. A repeating task checks its handle before every tick, so a tick that
//! is already queued when the handle is aborted never fires. A tick that is
//! already running is not interrupted.

mod test_scheduler;
#[cfg(feature = "tokio-scheduler")]
mod tokio_scheduler;

use std::time::Duration;

use futures::future::{AbortHandle, AbortRegistration};
use tracing::trace;

use crate::subscription::Subscription;

pub use test_scheduler::TestScheduler;
#[cfg(feature = "tokio-scheduler")]
pub use tokio_scheduler::TokioScheduler;

pub trait Scheduler: Clone + Send + 'static {
  /// Run `task` once, after `delay` if given.
  fn schedule<T>(&self, task: T, delay: Option<Duration>) -> TaskHandle
  where
    T: FnOnce() + Send + 'static;

  /// Call `task` with `0, 1, 2, ...` every `period`, the first call after
  /// `delay` (or after one `period` if no delay is given). The task returns
  /// `false` to stop repeating.
  fn schedule_repeating<T>(&self, task: T, period: Duration, delay: Option<Duration>) -> TaskHandle
  where
    T: FnMut(usize) -> bool + Send + 'static;
}

/// Cancellation handle of a scheduled task.
///
/// Closed once the task is aborted or has run to its end.
#[derive(Clone, Debug)]
pub struct TaskHandle(AbortHandle);

impl TaskHandle {
  pub(crate) fn new_pair() -> (TaskHandle, AbortRegistration) {
    let (handle, registration) = AbortHandle::new_pair();
    (TaskHandle(handle), registration)
  }

  /// Mark the task as done.
  #[inline]
  pub(crate) fn finish(&self) { self.0.abort() }
}

impl Subscription for TaskHandle {
  fn unsubscribe(self) {
    if !self.0.is_aborted() {
      trace!("scheduled task cancelled");
      self.0.abort();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.is_aborted() }
}
