//! Subjects: observables that are also observers, multicasting every signal
//! they receive to the observers subscribed to them.
//!
//! All variants share [`Subject`]; they differ only in the buffer that
//! decides what a late subscriber sees:
//!
//! | variant            | live values | replayed to a new subscriber           |
//! |--------------------|-------------|----------------------------------------|
//! | [`PublishSubject`] | yes         | nothing                                |
//! | [`BehaviorSubject`]| yes         | the latest value                       |
//! | [`ReplaySubject`]  | yes         | the last `capacity` values             |
//! | [`AsyncSubject`]   | no          | the last value, once completed         |
//!
//! Once terminated, a subject replays its terminal signal (after the buffered
//! values) to every new subscriber and ignores further emissions.
//!
//! # Delivery
//!
//! The observer list is locked only to take a snapshot; the lock is released
//! before any observer runs. An observer subscribed during a delivery pass
//! starts receiving with the next signal. An observer unsubscribed during a
//! pass still receives that pass's signal and is gone from the next one.
//! Deliveries to a single observer never overlap; emitting into a subject
//! from inside one of its own observers, on the same thread, panics.

mod async_subject;
mod behavior;
mod publish;
mod relay;
mod replay;
mod subscribers;

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, trace};

pub use async_subject::{AsyncSubject, LastValue};
pub use behavior::{BehaviorSubject, LatestValue};
pub use publish::{NoBuffer, PublishSubject};
pub use relay::{BehaviorRelay, PublishRelay};
pub use replay::{ReplaySubject, ReplayWindow};

use self::subscribers::{ObserverSlot, Subscribers};
use crate::{
  observable::{Observable, ObservableExt},
  observer::{BoxedObserver, Observer},
  rc::MutArc,
  subscription::Subscription,
};

/// What a subject keeps for subscribers that arrive later.
pub trait SubjectBuffer<Item> {
  /// Store an emitted value. Returning `false` withholds it from the current
  /// observers.
  fn record(&mut self, value: &Item) -> bool;

  /// Values a new subscriber receives before anything else.
  fn replay(&self) -> Vec<Item>;

  /// The subject completed; the returned value goes to every current
  /// observer ahead of the completion.
  fn on_complete(&mut self) -> Option<Item> { None }

  /// The subject failed.
  fn on_error(&mut self) {}
}

#[derive(Clone)]
pub(crate) enum Terminal<Err> {
  Error(Err),
  Completed,
}

struct SubjectCore<Item, Err, B> {
  observers: Subscribers<Item, Err>,
  terminal: Option<Terminal<Err>>,
  buffer: B,
}

/// A multicasting observable with a replay policy `B`.
///
/// Clones share the same observers, buffer and terminal state.
///
/// With [`Observer`] in scope, `subject.error(e)` and `subject.complete()`
/// resolve to the trait methods, which take the handle by value; call them on
/// a clone to keep using the subject afterwards.
pub struct Subject<Item, Err, B> {
  core: MutArc<SubjectCore<Item, Err, B>>,
}

impl<Item, Err, B> Clone for Subject<Item, Err, B> {
  #[inline]
  fn clone(&self) -> Self { Subject { core: self.core.clone() } }
}

impl<Item, Err, B> Subject<Item, Err, B> {
  pub(crate) fn with_buffer(buffer: B) -> Self {
    let core = SubjectCore { observers: Subscribers::default(), terminal: None, buffer };
    Subject { core: MutArc::own(core) }
  }

  /// Number of observers currently subscribed.
  pub fn subscriber_count(&self) -> usize { self.core.rc_deref_mut().observers.len() }

  /// Whether the subject received an error or a completion.
  pub fn is_terminated(&self) -> bool { self.core.rc_deref_mut().terminal.is_some() }

  fn prune(&self, finished: &[usize]) {
    if finished.is_empty() {
      return;
    }
    let mut core = self.core.rc_deref_mut();
    for id in finished {
      core.observers.remove(*id);
    }
  }
}

impl<Item, Err, B> Subject<Item, Err, B>
where
  Item: Clone,
  Err: Clone,
  B: SubjectBuffer<Item>,
{
  /// Emit `value` to every current observer, in subscription order.
  ///
  /// Ignored once the subject terminated.
  ///
  /// # Panics
  ///
  /// When called from inside one of this subject's observers on the thread
  /// that is delivering to it.
  pub fn next(&self, value: Item) {
    let slots = {
      let mut core = self.core.rc_deref_mut();
      if core.terminal.is_some() {
        trace!("subject ignored a value after termination");
        return;
      }
      if !core.buffer.record(&value) {
        return;
      }
      core.observers.snapshot()
    };

    let mut finished = SmallVec::<[usize; 2]>::new();
    if let Some(((last_id, last), rest)) = slots.split_last() {
      for (id, slot) in rest {
        if !slot.next(value.clone()) {
          finished.push(*id);
        }
      }
      if !last.next(value) {
        finished.push(*last_id);
      }
    }
    self.prune(&finished);
  }

  /// Terminate with `err`. Ignored once the subject terminated.
  ///
  /// # Panics
  ///
  /// When called from inside one of this subject's observers on the thread
  /// that is delivering to it; the observer would receive its terminal
  /// signal while still handling a value.
  pub fn error(&self, err: Err) {
    let slots = {
      let mut core = self.core.rc_deref_mut();
      if core.terminal.is_some() {
        trace!("subject ignored an error after termination");
        return;
      }
      core.buffer.on_error();
      core.terminal = Some(Terminal::Error(err.clone()));
      core.observers.drain()
    };
    debug!(observers = slots.len(), "subject terminated with an error");

    if let Some(((_, last), rest)) = slots.split_last() {
      for (_, slot) in rest {
        slot.error(err.clone());
      }
      last.error(err);
    }
  }

  /// Complete. Ignored once the subject terminated.
  ///
  /// # Panics
  ///
  /// When called from inside one of this subject's observers on the thread
  /// that is delivering to it, as [`Subject::error`] does.
  pub fn complete(&self) {
    let (slots, flushed) = {
      let mut core = self.core.rc_deref_mut();
      if core.terminal.is_some() {
        trace!("subject ignored a completion after termination");
        return;
      }
      let flushed = core.buffer.on_complete();
      core.terminal = Some(Terminal::Completed);
      (core.observers.drain(), flushed)
    };
    debug!(observers = slots.len(), "subject completed");

    for (_, slot) in slots {
      if let Some(value) = flushed.clone() {
        slot.next(value);
      }
      slot.complete();
    }
  }

  fn subscribe_boxed(&self, observer: BoxedObserver<Item, Err>) -> SubjectSubscription<Item, Err, B> {
    let finished = observer.is_finished();
    let slot = Arc::new(ObserverSlot::new(observer));
    if finished {
      slot.mark_closed();
      return SubjectSubscription { core: self.core.clone(), slot, id: None };
    }

    // The slot stays locked until the replay went out, so a value emitted
    // concurrently reaches the new observer only after its replay.
    let guard = slot.lock();
    let (replay, terminal, id) = {
      let mut core = self.core.rc_deref_mut();
      let replay = core.buffer.replay();
      let terminal = core.terminal.clone();
      let id = terminal.is_none().then(|| core.observers.add(slot.clone()));
      (replay, terminal, id)
    };

    let mut cell = guard.borrow_mut();
    for value in replay {
      let Some(observer) = cell.as_mut() else { break };
      observer.next(value);
      if observer.is_finished() {
        *cell = None;
      }
    }
    match (terminal, cell.take()) {
      (Some(Terminal::Error(err)), Some(observer)) => observer.error(err),
      (Some(Terminal::Completed), Some(observer)) => observer.complete(),
      (None, Some(observer)) => *cell = Some(observer),
      (_, None) => {}
    }
    let finished = cell.is_none();
    drop(cell);
    drop(guard);

    if finished {
      slot.mark_closed();
      if let Some(id) = id {
        self.prune(&[id]);
      }
    }
    SubjectSubscription { core: self.core.clone(), slot, id }
  }
}

impl<Item, Err, B, O> Observable<Item, Err, O> for Subject<Item, Err, B>
where
  O: Observer<Item, Err> + Send + 'static,
  Item: Clone + 'static,
  Err: Clone + 'static,
  B: SubjectBuffer<Item>,
{
  type Unsub = SubjectSubscription<Item, Err, B>;

  fn actual_subscribe(self, observer: O) -> Self::Unsub { self.subscribe_boxed(Box::new(observer)) }
}

impl<Item, Err, B> ObservableExt<Item, Err> for Subject<Item, Err, B> {}

impl<Item, Err, B> Observer<Item, Err> for Subject<Item, Err, B>
where
  Item: Clone,
  Err: Clone,
  B: SubjectBuffer<Item>,
{
  #[inline]
  fn next(&mut self, value: Item) { Subject::next(self, value) }

  #[inline]
  fn error(self, err: Err) { Subject::error(&self, err) }

  #[inline]
  fn complete(self) { Subject::complete(&self) }

  #[inline]
  fn is_finished(&self) -> bool { self.is_terminated() }
}

/// Subscription to a [`Subject`]; unsubscribing removes the observer.
pub struct SubjectSubscription<Item, Err, B> {
  core: MutArc<SubjectCore<Item, Err, B>>,
  slot: Arc<ObserverSlot<Item, Err>>,
  id: Option<usize>,
}

impl<Item, Err, B> Subscription for SubjectSubscription<Item, Err, B> {
  fn unsubscribe(self) {
    self.slot.mark_closed();
    let removed = self.id.and_then(|id| self.core.rc_deref_mut().observers.remove(id));
    drop(removed);
  }

  #[inline]
  fn is_closed(&self) -> bool { self.slot.is_closed() }
}
