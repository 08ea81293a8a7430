use crate::observable::*;

/// Build the observable at subscription time.
///
/// `factory` runs once per subscription, so every subscriber can get a
/// differently constructed source.
pub fn defer<F, S>(factory: F) -> Defer<F>
where
  F: FnOnce() -> S,
{
  Defer(factory)
}

/// Alias of [`defer`].
#[inline]
pub fn deferred<F, S>(factory: F) -> Defer<F>
where
  F: FnOnce() -> S,
{
  defer(factory)
}

#[derive(Clone)]
pub struct Defer<F>(F);

impl<F, S, Item, Err, O> Observable<Item, Err, O> for Defer<F>
where
  F: FnOnce() -> S,
  S: Observable<Item, Err, O>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub { (self.0)().actual_subscribe(observer) }
}

impl<F, S, Item, Err> ObservableExt<Item, Err> for Defer<F>
where
  F: FnOnce() -> S,
  S: ObservableExt<Item, Err>,
{
}
