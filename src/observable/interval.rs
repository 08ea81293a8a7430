use std::time::Duration;

use crate::{
  error::RxError,
  observable::*,
  observer::Observer,
  scheduler::{Scheduler, TaskHandle},
};

/// Emit `0, 1, 2, ...` every `period` on `scheduler`; never completes.
pub fn interval<S>(period: Duration, scheduler: S) -> IntervalObservable<S> {
  IntervalObservable { scheduler, period, delay: None }
}

/// Like [`interval`], with the first value emitted after `delay` instead of
/// after one `period`.
pub fn interval_with_delay<S>(
  period: Duration, delay: Duration, scheduler: S,
) -> IntervalObservable<S> {
  IntervalObservable { scheduler, period, delay: Some(delay) }
}

/// Emit `0` after `delay`, then complete.
pub fn timer<S>(delay: Duration, scheduler: S) -> TimerObservable<S> {
  TimerObservable { scheduler, delay }
}

#[derive(Clone)]
pub struct IntervalObservable<S> {
  scheduler: S,
  period: Duration,
  delay: Option<Duration>,
}

#[derive(Clone)]
pub struct TimerObservable<S> {
  scheduler: S,
  delay: Duration,
}

impl<S, O> Observable<usize, RxError, O> for IntervalObservable<S>
where
  O: Observer<usize, RxError> + Send + 'static,
  S: Scheduler,
{
  type Unsub = TaskHandle;

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    let Self { scheduler, period, delay } = self;
    scheduler.schedule_repeating(
      move |seq| {
        if observer.is_finished() {
          return false;
        }
        observer.next(seq);
        !observer.is_finished()
      },
      period,
      delay,
    )
  }
}

impl<S, O> Observable<usize, RxError, O> for TimerObservable<S>
where
  O: Observer<usize, RxError> + Send + 'static,
  S: Scheduler,
{
  type Unsub = TaskHandle;

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    self.scheduler.schedule(
      move || {
        if !observer.is_finished() {
          observer.next(0);
          observer.complete();
        }
      },
      Some(self.delay),
    )
  }
}

impl<S> ObservableExt<usize, RxError> for IntervalObservable<S> {}
impl<S> ObservableExt<usize, RxError> for TimerObservable<S> {}

#[cfg(test)]
mod tests {
  use crate::{prelude::*, scheduler::TestScheduler};
  use std::{
    sync::{Arc, Mutex},
    time::Duration,
  };

  #[rxcore_macro::test]
  fn emits_on_every_period() {
    let scheduler = TestScheduler::new();
    let seqs = Arc::new(Mutex::new(vec![]));
    let c_seqs = seqs.clone();
    let subscription = observable::interval(Duration::from_millis(100), scheduler.clone())
      .subscribe(move |v| c_seqs.lock().unwrap().push(v));

    scheduler.advance_by(Duration::from_millis(99));
    assert!(seqs.lock().unwrap().is_empty());
    scheduler.advance_by(Duration::from_millis(301));
    assert_eq!(*seqs.lock().unwrap(), vec![0, 1, 2, 3]);

    subscription.unsubscribe();
    scheduler.advance_by(Duration::from_secs(1));
    assert_eq!(*seqs.lock().unwrap(), vec![0, 1, 2, 3]);
  }

  #[rxcore_macro::test]
  fn delay_moves_first_tick() {
    let scheduler = TestScheduler::new();
    let seqs = Arc::new(Mutex::new(vec![]));
    let c_seqs = seqs.clone();
    observable::interval_with_delay(
      Duration::from_millis(100),
      Duration::from_millis(10),
      scheduler.clone(),
    )
    .subscribe(move |v| c_seqs.lock().unwrap().push(v));

    scheduler.advance_by(Duration::from_millis(10));
    assert_eq!(*seqs.lock().unwrap(), vec![0]);
    scheduler.advance_by(Duration::from_millis(100));
    assert_eq!(*seqs.lock().unwrap(), vec![0, 1]);
  }

  #[rxcore_macro::test]
  fn take_stops_the_task() {
    let scheduler = TestScheduler::new();
    let seqs = Arc::new(Mutex::new(vec![]));
    let completed = Arc::new(Mutex::new(false));
    let (c_seqs, c_completed) = (seqs.clone(), completed.clone());
    let subscription = observable::interval(Duration::from_millis(10), scheduler.clone())
      .take(3)
      .on_complete(move || *c_completed.lock().unwrap() = true)
      .subscribe(move |v| c_seqs.lock().unwrap().push(v));

    scheduler.advance_by(Duration::from_millis(100));
    assert_eq!(*seqs.lock().unwrap(), vec![0, 1, 2]);
    assert!(*completed.lock().unwrap());
    assert!(subscription.is_closed());
    assert_eq!(scheduler.pending_count(), 0);
  }

  #[rxcore_macro::test]
  fn timer_emits_once() {
    let scheduler = TestScheduler::new();
    let seqs = Arc::new(Mutex::new(vec![]));
    let completed = Arc::new(Mutex::new(false));
    let (c_seqs, c_completed) = (seqs.clone(), completed.clone());
    observable::timer(Duration::from_millis(50), scheduler.clone())
      .on_complete(move || *c_completed.lock().unwrap() = true)
      .subscribe(move |v| c_seqs.lock().unwrap().push(v));

    scheduler.advance_by(Duration::from_millis(49));
    assert!(seqs.lock().unwrap().is_empty());
    scheduler.advance_by(Duration::from_millis(1));
    assert_eq!(*seqs.lock().unwrap(), vec![0]);
    assert!(*completed.lock().unwrap());
  }
}
