use crate::{observable::*, observer::Observer};

/// Drops every value and forwards only the terminal signal.
#[derive(Clone)]
pub struct IgnoreElementsOp<S> {
  source: S,
}

impl<S> IgnoreElementsOp<S> {
  #[inline]
  pub(crate) fn new(source: S) -> Self { IgnoreElementsOp { source } }
}

impl<Item, Err, O, S> Observable<Item, Err, O> for IgnoreElementsOp<S>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, IgnoreElementsObserver<O>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self.source.actual_subscribe(IgnoreElementsObserver(observer))
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for IgnoreElementsOp<S> where
  S: ObservableExt<Item, Err>
{
}

pub struct IgnoreElementsObserver<O>(O);

impl<Item, Err, O> Observer<Item, Err> for IgnoreElementsObserver<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, _: Item) {}

  #[inline]
  fn error(self, err: Err) { self.0.error(err) }

  #[inline]
  fn complete(self) { self.0.complete() }

  #[inline]
  fn is_finished(&self) -> bool { self.0.is_finished() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[rxcore_macro::test]
  fn keeps_completion() {
    let mut next_count = 0;
    let mut completed = false;
    observable::from_iter(0..10)
      .ignore_elements()
      .on_complete(|| completed = true)
      .subscribe(|_| next_count += 1);

    assert_eq!(next_count, 0);
    assert!(completed);
  }

  #[rxcore_macro::test]
  fn keeps_error() {
    let mut error = None;
    observable::create(|emitter: &mut dyn Emitter<i32, RxError>| {
      emitter.next(1);
      emitter.error(RxError::message("late"));
    })
    .ignore_elements()
    .on_error(|e| error = Some(e.clone()))
    .subscribe(|_| unreachable!());

    assert_eq!(error, Some(RxError::message("late")));
  }
}
