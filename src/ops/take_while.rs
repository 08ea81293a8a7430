use crate::{observable::*, observer::Observer};

/// Emits values while the predicate holds.
///
/// The first value that fails the predicate is dropped and the downstream
/// completes; the source is told to stop.
#[derive(Clone)]
pub struct TakeWhileOp<S, F> {
  source: S,
  predicate: F,
}

impl<S, F> TakeWhileOp<S, F> {
  #[inline]
  pub(crate) fn new(source: S, predicate: F) -> Self { TakeWhileOp { source, predicate } }
}

impl<Item, Err, O, S, F> Observable<Item, Err, O> for TakeWhileOp<S, F>
where
  S: Observable<Item, Err, TakeWhileObserver<O, F>>,
  O: Observer<Item, Err>,
  F: FnMut(&Item) -> bool,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(TakeWhileObserver { observer: Some(observer), predicate: self.predicate })
  }
}

impl<Item, Err, S, F> ObservableExt<Item, Err> for TakeWhileOp<S, F> where
  S: ObservableExt<Item, Err>
{
}

pub struct TakeWhileObserver<O, F> {
  observer: Option<O>,
  predicate: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for TakeWhileObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnMut(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    let Some(observer) = self.observer.as_mut() else { return };
    if (self.predicate)(&value) {
      observer.next(value);
    } else if let Some(observer) = self.observer.take() {
      observer.complete();
    }
  }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_finished(&self) -> bool { Observer::<Item, Err>::is_finished(&self.observer) }
}
