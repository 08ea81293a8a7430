use std::time::Duration;

use futures::future::Abortable;
use tokio::{
  runtime::Handle,
  time::{interval_at, sleep, Instant, MissedTickBehavior},
};

use super::{Scheduler, TaskHandle};
use crate::subscription::Subscription;

// About thirty years, the horizon tokio itself uses for unreachable deadlines.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

fn deadline_after(delay: Duration) -> Instant {
  let now = Instant::now();
  now.checked_add(delay).unwrap_or_else(|| now + FAR_FUTURE)
}

/// Runs tasks on a tokio runtime.
#[derive(Clone, Debug)]
pub struct TokioScheduler(Handle);

impl TokioScheduler {
  pub fn new(handle: Handle) -> Self { TokioScheduler(handle) }

  /// The runtime the caller is running on, if any.
  pub fn try_current() -> Option<Self> { Handle::try_current().ok().map(TokioScheduler) }
}

impl Scheduler for TokioScheduler {
  fn schedule<T>(&self, task: T, delay: Option<Duration>) -> TaskHandle
  where
    T: FnOnce() + Send + 'static,
  {
    let (handle, registration) = TaskHandle::new_pair();
    let finished = handle.clone();
    let fut = async move {
      if let Some(delay) = delay {
        sleep(delay).await;
      }
      task();
      finished.finish();
    };
    self.0.spawn(Abortable::new(fut, registration));
    handle
  }

  fn schedule_repeating<T>(
    &self, mut task: T, period: Duration, delay: Option<Duration>,
  ) -> TaskHandle
  where
    T: FnMut(usize) -> bool + Send + 'static,
  {
    let (handle, registration) = TaskHandle::new_pair();
    let guard = handle.clone();
    let fut = async move {
      let start = deadline_after(delay.unwrap_or(period));
      // tokio rejects a zero period.
      let mut ticks = interval_at(start, period.max(Duration::from_nanos(1)));
      ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
      let mut seq = 0;
      loop {
        ticks.tick().await;
        if guard.is_closed() || !task(seq) {
          break;
        }
        seq += 1;
      }
      guard.finish();
    };
    self.0.spawn(Abortable::new(fut, registration));
    handle
  }
}
