use crate::{observable::*, observer::Observer};

#[derive(Clone)]
pub struct FilterOp<S, F> {
  source: S,
  predicate: F,
}

impl<S, F> FilterOp<S, F> {
  #[inline]
  pub(crate) fn new(source: S, predicate: F) -> Self { FilterOp { source, predicate } }
}

impl<Item, Err, O, S, F> Observable<Item, Err, O> for FilterOp<S, F>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, FilterObserver<O, F>>,
  F: FnMut(&Item) -> bool,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self.source.actual_subscribe(FilterObserver { observer, predicate: self.predicate })
  }
}

impl<Item, Err, S, F> ObservableExt<Item, Err> for FilterOp<S, F> where S: ObservableExt<Item, Err> {}

pub struct FilterObserver<O, F> {
  observer: O,
  predicate: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for FilterObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnMut(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    if (self.predicate)(&value) {
      self.observer.next(value)
    }
  }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}
