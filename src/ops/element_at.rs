use crate::{error::RxError, observable::*, observer::Observer};

/// Emits the value at zero-based `index`, then completes.
///
/// A source that completes before reaching `index` ends with
/// [`RxError::IndexOutOfRange`].
#[derive(Clone)]
pub struct ElementAtOp<S> {
  source: S,
  index: usize,
}

impl<S> ElementAtOp<S> {
  #[inline]
  pub(crate) fn new(source: S, index: usize) -> Self { ElementAtOp { source, index } }
}

impl<Item, Err, O, S> Observable<Item, Err, O> for ElementAtOp<S>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, ElementAtObserver<O>>,
  Err: From<RxError>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let observer = ElementAtObserver { observer: Some(observer), index: self.index, seen: 0 };
    self.source.actual_subscribe(observer)
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for ElementAtOp<S> where S: ObservableExt<Item, Err> {}

pub struct ElementAtObserver<O> {
  observer: Option<O>,
  index: usize,
  seen: usize,
}

impl<Item, Err, O> Observer<Item, Err> for ElementAtObserver<O>
where
  O: Observer<Item, Err>,
  Err: From<RxError>,
{
  fn next(&mut self, value: Item) {
    if self.observer.is_none() {
      return;
    }
    if self.seen == self.index {
      if let Some(mut observer) = self.observer.take() {
        observer.next(value);
        observer.complete();
      }
    } else {
      self.seen += 1;
    }
  }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) {
    if let Some(observer) = self.observer {
      let err = RxError::IndexOutOfRange { index: self.index, count: self.seen };
      observer.error(err.into());
    }
  }

  #[inline]
  fn is_finished(&self) -> bool { Observer::<Item, Err>::is_finished(&self.observer) }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[rxcore_macro::test]
  fn picks_the_indexed_value() {
    let mut values = vec![];
    let mut completed = false;
    observable::from_iter(10..20)
      .element_at(3)
      .on_complete(|| completed = true)
      .subscribe(|v| values.push(v));

    assert_eq!(values, vec![13]);
    assert!(completed);
  }

  #[rxcore_macro::test]
  fn stops_an_endless_source() {
    let mut values = vec![];
    observable::repeat_element("x").element_at(0).subscribe(|v| values.push(v));
    assert_eq!(values, vec!["x"]);
  }

  #[rxcore_macro::test]
  fn out_of_range() {
    let mut error = None;
    observable::of!(1, 2, 3)
      .element_at(5)
      .on_error(|e| error = Some(e.clone()))
      .subscribe(|_| unreachable!());

    assert_eq!(error, Some(RxError::IndexOutOfRange { index: 5, count: 3 }));
  }

  #[rxcore_macro::test]
  fn source_error_passes() {
    let mut error = None;
    observable::throw_err::<i32>(RxError::message("boom"))
      .element_at(0)
      .on_error(|e| error = Some(e.clone()))
      .subscribe(|_| {});

    assert_eq!(error, Some(RxError::message("boom")));
  }
}
