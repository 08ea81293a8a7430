use crate::{observable::*, observer::Observer};

/// Emits only the first `count` values of the source, then completes.
///
/// Completion happens as soon as the `count`-th value went out, without
/// waiting for the source. The source sees the observer finish and stops: a
/// synchronous source ends its loop, a subject drops the observer, a
/// scheduled source cancels its task.
///
/// ```
/// use rxcore::prelude::*;
///
/// let mut seen = vec![];
/// observable::from_iter(0..10).take(5).subscribe(|v| seen.push(v));
/// assert_eq!(seen, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Clone)]
pub struct TakeOp<S> {
  source: S,
  count: usize,
}

impl<S> TakeOp<S> {
  #[inline]
  pub(crate) fn new(source: S, count: usize) -> Self { TakeOp { source, count } }
}

impl<Item, Err, O, S> Observable<Item, Err, O> for TakeOp<S>
where
  S: Observable<Item, Err, TakeObserver<O>>,
  O: Observer<Item, Err>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let observer = if self.count == 0 {
      observer.complete();
      None
    } else {
      Some(observer)
    };
    self.source.actual_subscribe(TakeObserver { observer, remaining: self.count })
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for TakeOp<S> where S: ObservableExt<Item, Err> {}

pub struct TakeObserver<O> {
  observer: Option<O>,
  remaining: usize,
}

impl<Item, Err, O> Observer<Item, Err> for TakeObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    let Some(observer) = self.observer.as_mut() else { return };
    self.remaining -= 1;
    observer.next(value);
    if self.remaining == 0 {
      if let Some(observer) = self.observer.take() {
        observer.complete();
      }
    }
  }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_finished(&self) -> bool { Observer::<Item, Err>::is_finished(&self.observer) }
}
