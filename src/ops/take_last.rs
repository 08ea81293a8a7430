use std::collections::VecDeque;

use crate::{observable::*, observer::Observer};

/// Emits the last `count` values of the source once it completes.
///
/// Values are buffered in a ring; on completion they are flushed in their
/// original order followed by the completion. An error discards the buffer
/// and only the error is delivered.
#[derive(Clone)]
pub struct TakeLastOp<S> {
  source: S,
  count: usize,
}

impl<S> TakeLastOp<S> {
  #[inline]
  pub(crate) fn new(source: S, count: usize) -> Self { TakeLastOp { source, count } }
}

impl<Item, Err, O, S> Observable<Item, Err, O> for TakeLastOp<S>
where
  S: Observable<Item, Err, TakeLastObserver<O, Item>>,
  O: Observer<Item, Err>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self.source.actual_subscribe(TakeLastObserver {
      observer,
      count: self.count,
      queue: VecDeque::with_capacity(self.count.min(64)),
    })
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for TakeLastOp<S> where S: ObservableExt<Item, Err> {}

pub struct TakeLastObserver<O, Item> {
  observer: O,
  count: usize,
  queue: VecDeque<Item>,
}

impl<Item, Err, O> Observer<Item, Err> for TakeLastObserver<O, Item>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if self.count == 0 {
      return;
    }
    if self.queue.len() == self.count {
      self.queue.pop_front();
    }
    self.queue.push_back(value);
  }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(mut self) {
    for value in self.queue.drain(..) {
      self.observer.next(value);
    }
    self.observer.complete();
  }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}
