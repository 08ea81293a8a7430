use std::{cmp::Ordering, collections::BinaryHeap, time::Duration};

use tracing::trace;

use super::{Scheduler, TaskHandle};
use crate::{rc::MutArc, subscription::Subscription};

/// A scheduler driven by a virtual clock.
///
/// Nothing runs until the clock is moved with [`advance_by`] or due tasks are
/// flushed with [`run_tasks`]. Tasks run on the calling thread, in order of
/// due time and then of scheduling order.
///
/// [`advance_by`]: TestScheduler::advance_by
/// [`run_tasks`]: TestScheduler::run_tasks
#[derive(Clone, Default)]
pub struct TestScheduler(MutArc<State>);

#[derive(Default)]
struct State {
  now: Duration,
  next_id: usize,
  queue: BinaryHeap<ScheduledTask>,
}

enum Task {
  Once(Box<dyn FnOnce() + Send>),
  Repeat { task: Box<dyn FnMut(usize) -> bool + Send>, period: Duration, seq: usize },
}

struct ScheduledTask {
  due: Duration,
  id: usize,
  task: Task,
  handle: TaskHandle,
}

impl PartialEq for ScheduledTask {
  fn eq(&self, other: &Self) -> bool { self.due == other.due && self.id == other.id }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

// Reversed, so the heap pops the earliest task first.
impl Ord for ScheduledTask {
  fn cmp(&self, other: &Self) -> Ordering {
    other.due.cmp(&self.due).then_with(|| other.id.cmp(&self.id))
  }
}

impl TestScheduler {
  pub fn new() -> Self { Self::default() }

  /// Current virtual time, measured from creation.
  pub fn now(&self) -> Duration { self.0.rc_deref_mut().now }

  /// Tasks still queued, cancelled ones excluded.
  pub fn pending_count(&self) -> usize {
    self.0.rc_deref_mut().queue.iter().filter(|t| !t.handle.is_closed()).count()
  }

  /// Move the clock forward by `duration`, running every task that falls due
  /// on the way. A repeating task with a zero period never lets this return.
  pub fn advance_by(&self, duration: Duration) {
    let target = self.now().saturating_add(duration);
    self.run_until(target);
    let mut state = self.0.rc_deref_mut();
    if state.now < target {
      state.now = target;
    }
  }

  /// Run the tasks that are due at the current time.
  pub fn run_tasks(&self) {
    let now = self.now();
    self.run_until(now);
  }

  fn push(&self, due_in: Duration, task: Task, handle: TaskHandle) {
    let mut state = self.0.rc_deref_mut();
    let id = state.next_id;
    state.next_id += 1;
    // Unreachably far deadlines saturate instead of overflowing.
    let due = state.now.saturating_add(due_in);
    state.queue.push(ScheduledTask { due, id, task, handle });
  }

  fn run_until(&self, target: Duration) {
    loop {
      let scheduled = {
        let mut state = self.0.rc_deref_mut();
        match state.queue.peek() {
          Some(next) if next.due <= target => {}
          _ => break,
        }
        let Some(scheduled) = state.queue.pop() else { break };
        state.now = state.now.max(scheduled.due);
        scheduled
      };

      let ScheduledTask { task, handle, .. } = scheduled;
      if handle.is_closed() {
        trace!("test scheduler dropped a cancelled task");
        continue;
      }
      match task {
        Task::Once(task) => {
          task();
          handle.finish();
        }
        Task::Repeat { mut task, period, seq } => {
          if task(seq) && !handle.is_closed() {
            self.push(period, Task::Repeat { task, period, seq: seq + 1 }, handle);
          } else {
            handle.finish();
          }
        }
      }
    }
  }
}

impl Scheduler for TestScheduler {
  fn schedule<T>(&self, task: T, delay: Option<Duration>) -> TaskHandle
  where
    T: FnOnce() + Send + 'static,
  {
    let (handle, _) = TaskHandle::new_pair();
    self.push(delay.unwrap_or_default(), Task::Once(Box::new(task)), handle.clone());
    handle
  }

  fn schedule_repeating<T>(&self, task: T, period: Duration, delay: Option<Duration>) -> TaskHandle
  where
    T: FnMut(usize) -> bool + Send + 'static,
  {
    let (handle, _) = TaskHandle::new_pair();
    let task = Task::Repeat { task: Box::new(task), period, seq: 0 };
    self.push(delay.unwrap_or(period), task, handle.clone());
    handle
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::{Arc, Mutex};

  #[rxcore_macro::test]
  fn schedule_runs_when_due() {
    let scheduler = TestScheduler::new();
    let invokes = Arc::new(Mutex::new(0));
    let c_invokes = invokes.clone();
    let delay = Duration::from_millis(100);
    let handle = scheduler.schedule(move || *c_invokes.lock().unwrap() += 1, Some(delay));

    scheduler.advance_by(Duration::from_millis(99));
    assert_eq!(*invokes.lock().unwrap(), 0);
    assert!(!handle.is_closed());
    scheduler.advance_by(Duration::from_millis(1));
    assert_eq!(*invokes.lock().unwrap(), 1);
    assert!(handle.is_closed());
    scheduler.advance_by(10 * delay);
    assert_eq!(*invokes.lock().unwrap(), 1);
  }

  #[rxcore_macro::test]
  fn huge_delay_never_comes_due() {
    let scheduler = TestScheduler::new();
    let invokes = Arc::new(Mutex::new(0));
    let c_invokes = invokes.clone();
    scheduler.advance_by(Duration::from_secs(1));
    scheduler.schedule(move || *c_invokes.lock().unwrap() += 1, Some(Duration::MAX));
    scheduler.advance_by(Duration::from_secs(3600));
    assert_eq!(*invokes.lock().unwrap(), 0);
    assert_eq!(scheduler.pending_count(), 1);

    scheduler.advance_by(Duration::MAX);
    assert_eq!(scheduler.now(), Duration::MAX);
    assert_eq!(*invokes.lock().unwrap(), 1);
  }

  #[rxcore_macro::test]
  fn schedule_without_delay_needs_a_flush() {
    let scheduler = TestScheduler::new();
    let invokes = Arc::new(Mutex::new(0));
    let c_invokes = invokes.clone();
    scheduler.schedule(move || *c_invokes.lock().unwrap() += 1, None);
    assert_eq!(*invokes.lock().unwrap(), 0);
    scheduler.run_tasks();
    assert_eq!(*invokes.lock().unwrap(), 1);
  }

  #[rxcore_macro::test]
  fn no_run_after_unsubscribe() {
    let scheduler = TestScheduler::new();
    let invokes = Arc::new(Mutex::new(0));
    let c_invokes = invokes.clone();
    let delay = Duration::from_millis(100);
    let handle = scheduler.schedule(move || *c_invokes.lock().unwrap() += 1, Some(delay));
    assert_eq!(scheduler.pending_count(), 1);
    handle.clone().unsubscribe();
    assert!(handle.is_closed());
    assert_eq!(scheduler.pending_count(), 0);
    scheduler.advance_by(delay);
    assert_eq!(*invokes.lock().unwrap(), 0);
  }

  #[rxcore_macro::test]
  fn schedule_repeating() {
    let scheduler = TestScheduler::new();
    let seqs = Arc::new(Mutex::new(vec![]));
    let c_seqs = seqs.clone();
    let period = Duration::from_millis(100);
    let handle = scheduler.schedule_repeating(
      move |seq| {
        c_seqs.lock().unwrap().push(seq);
        true
      },
      period,
      Some(Duration::from_millis(5)),
    );

    scheduler.advance_by(Duration::from_millis(4));
    assert!(seqs.lock().unwrap().is_empty());
    scheduler.advance_by(Duration::from_millis(1));
    assert_eq!(*seqs.lock().unwrap(), vec![0]);
    scheduler.advance_by(period);
    assert_eq!(*seqs.lock().unwrap(), vec![0, 1]);
    scheduler.advance_by(10 * period);
    assert_eq!(seqs.lock().unwrap().len(), 12);

    handle.clone().unsubscribe();
    scheduler.advance_by(10 * period);
    assert_eq!(seqs.lock().unwrap().len(), 12);
  }

  #[rxcore_macro::test]
  fn repeating_task_can_stop_itself() {
    let scheduler = TestScheduler::new();
    let period = Duration::from_millis(10);
    let handle = scheduler.schedule_repeating(|seq| seq < 2, period, None);
    scheduler.advance_by(10 * period);
    assert!(handle.is_closed());
    assert_eq!(scheduler.pending_count(), 0);
  }

  #[rxcore_macro::test]
  fn tasks_may_schedule_tasks() {
    let scheduler = TestScheduler::new();
    let log = Arc::new(Mutex::new(vec![]));
    let (c_scheduler, c_log) = (scheduler.clone(), log.clone());
    scheduler.schedule(
      move || {
        c_log.lock().unwrap().push(c_scheduler.now());
        let log = c_log.clone();
        let inner = c_scheduler.clone();
        c_scheduler.schedule(
          move || log.lock().unwrap().push(inner.now()),
          Some(Duration::from_millis(10)),
        );
      },
      Some(Duration::from_millis(10)),
    );
    scheduler.advance_by(Duration::from_millis(30));
    assert_eq!(
      *log.lock().unwrap(),
      vec![Duration::from_millis(10), Duration::from_millis(20)]
    );
    assert_eq!(scheduler.now(), Duration::from_millis(30));
  }
}
