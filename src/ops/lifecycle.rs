//! Hooks that observe the terminal signal without changing the stream.

use crate::{observable::*, observer::Observer};

/// Calls `func` with the error before forwarding it.
#[derive(Clone)]
pub struct OnErrorOp<S, F> {
  source: S,
  func: F,
}

impl<S, F> OnErrorOp<S, F> {
  #[inline]
  pub(crate) fn new(source: S, func: F) -> Self { OnErrorOp { source, func } }
}

impl<Item, Err, O, S, F> Observable<Item, Err, O> for OnErrorOp<S, F>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, OnErrorObserver<O, F>>,
  F: FnOnce(&Err),
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self.source.actual_subscribe(OnErrorObserver { observer, func: self.func })
  }
}

impl<Item, Err, S, F> ObservableExt<Item, Err> for OnErrorOp<S, F> where S: ObservableExt<Item, Err> {}

pub struct OnErrorObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for OnErrorObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnOnce(&Err),
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next(value) }

  fn error(self, err: Err) {
    (self.func)(&err);
    self.observer.error(err);
  }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}

/// Calls `func` before forwarding the completion.
#[derive(Clone)]
pub struct OnCompleteOp<S, F> {
  source: S,
  func: F,
}

impl<S, F> OnCompleteOp<S, F> {
  #[inline]
  pub(crate) fn new(source: S, func: F) -> Self { OnCompleteOp { source, func } }
}

impl<Item, Err, O, S, F> Observable<Item, Err, O> for OnCompleteOp<S, F>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, OnCompleteObserver<O, F>>,
  F: FnOnce(),
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self.source.actual_subscribe(OnCompleteObserver { observer, func: self.func })
  }
}

impl<Item, Err, S, F> ObservableExt<Item, Err> for OnCompleteOp<S, F> where
  S: ObservableExt<Item, Err>
{
}

pub struct OnCompleteObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for OnCompleteObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnOnce(),
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next(value) }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) {
    (self.func)();
    self.observer.complete();
  }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}
