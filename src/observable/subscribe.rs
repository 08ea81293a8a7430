use crate::observer::Observer;

/// Observer built from a `next` closure alone.
#[derive(Clone)]
pub struct ObserverN<N>(N);

impl<N> ObserverN<N> {
  #[inline]
  pub fn new(next: N) -> Self { ObserverN(next) }
}

impl<Item, Err, N> Observer<Item, Err> for ObserverN<N>
where
  N: FnMut(Item),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.0)(value) }

  #[inline]
  fn error(self, _: Err) {}

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_finished(&self) -> bool { false }
}

/// Observer built from `next`, `error` and `complete` closures.
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  #[inline]
  pub fn new(next: N, error: E, complete: C) -> Self { ObserverAll { next, error, complete } }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnOnce(Err),
  C: FnOnce(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value) }

  #[inline]
  fn error(self, err: Err) { (self.error)(err) }

  #[inline]
  fn complete(self) { (self.complete)() }

  #[inline]
  fn is_finished(&self) -> bool { false }
}
