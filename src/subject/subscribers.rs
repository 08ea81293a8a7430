use std::{
  cell::RefCell,
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  },
};

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use smallvec::SmallVec;

use crate::observer::{BoxedObserver, Observer};

const REENTRANT_EMISSION: &str = "re-entrant subject emission: an observer emitted into the \
                                  subject that is still delivering a signal to it";

/// One subscribed observer.
///
/// The mutex serializes deliveries from different threads; the `RefCell`
/// turns a delivery that re-enters the same observer on the same thread into
/// a panic instead of a deadlock. An unsubscribed observer is dropped with the
/// last snapshot holding its slot.
pub(super) struct ObserverSlot<Item, Err> {
  observer: ReentrantMutex<RefCell<Option<BoxedObserver<Item, Err>>>>,
  closed: AtomicBool,
}

pub(super) type SlotGuard<'a, Item, Err> =
  ReentrantMutexGuard<'a, RefCell<Option<BoxedObserver<Item, Err>>>>;

impl<Item, Err> ObserverSlot<Item, Err> {
  pub(super) fn new(observer: BoxedObserver<Item, Err>) -> Self {
    ObserverSlot { observer: ReentrantMutex::new(RefCell::new(Some(observer))), closed: AtomicBool::new(false) }
  }

  #[inline]
  pub(super) fn lock(&self) -> SlotGuard<'_, Item, Err> { self.observer.lock() }

  #[inline]
  pub(super) fn is_closed(&self) -> bool { self.closed.load(Ordering::Acquire) }

  #[inline]
  pub(super) fn mark_closed(&self) { self.closed.store(true, Ordering::Release) }

  fn with_observer<R>(&self, f: impl FnOnce(&mut Option<BoxedObserver<Item, Err>>) -> R) -> R {
    let guard = self.observer.lock();
    let Ok(mut observer) = guard.try_borrow_mut() else { panic!("{}", REENTRANT_EMISSION) };
    f(&mut observer)
  }

  /// Deliver a value. Returns `false` once the observer finished.
  ///
  /// A slot that was unsubscribed still takes the value: every snapshot that
  /// holds it was taken before the removal.
  pub(super) fn next(&self, value: Item) -> bool {
    let (alive, released) = self.with_observer(|slot| {
      let Some(observer) = slot.as_mut() else { return (false, None) };
      observer.next(value);
      if observer.is_finished() {
        (false, slot.take())
      } else {
        (true, None)
      }
    });
    if !alive {
      self.mark_closed();
    }
    drop(released);
    alive
  }

  pub(super) fn error(&self, err: Err) {
    if let Some(observer) = self.take() {
      observer.error(err);
    }
  }

  pub(super) fn complete(&self) {
    if let Some(observer) = self.take() {
      observer.complete();
    }
  }

  fn take(&self) -> Option<BoxedObserver<Item, Err>> {
    self.mark_closed();
    self.with_observer(Option::take)
  }
}

/// The observers of a subject, in subscription order.
pub(super) struct Subscribers<Item, Err> {
  next_id: usize,
  slots: SmallVec<[(usize, Arc<ObserverSlot<Item, Err>>); 2]>,
}

pub(super) type Snapshot<Item, Err> = SmallVec<[(usize, Arc<ObserverSlot<Item, Err>>); 2]>;

impl<Item, Err> Default for Subscribers<Item, Err> {
  fn default() -> Self { Subscribers { next_id: 0, slots: SmallVec::new() } }
}

impl<Item, Err> Subscribers<Item, Err> {
  pub(super) fn add(&mut self, slot: Arc<ObserverSlot<Item, Err>>) -> usize {
    let id = self.next_id;
    self.next_id += 1;
    self.slots.push((id, slot));
    id
  }

  pub(super) fn remove(&mut self, id: usize) -> Option<Arc<ObserverSlot<Item, Err>>> {
    let idx = self.slots.iter().position(|(slot_id, _)| *slot_id == id)?;
    Some(self.slots.remove(idx).1)
  }

  #[inline]
  pub(super) fn len(&self) -> usize { self.slots.len() }

  #[inline]
  pub(super) fn snapshot(&self) -> Snapshot<Item, Err> { self.slots.clone() }

  #[inline]
  pub(super) fn drain(&mut self) -> Snapshot<Item, Err> { std::mem::take(&mut self.slots) }
}
