use crate::{error::RxError, observable::*, observer::Observer};

/// Emits the only value of the source once it completes.
///
/// A second value ends the stream with [`RxError::MultipleElements`] and stops
/// the source; an empty source ends with [`RxError::NoElements`].
#[derive(Clone)]
pub struct SingleOp<S> {
  source: S,
}

impl<S> SingleOp<S> {
  #[inline]
  pub(crate) fn new(source: S) -> Self { SingleOp { source } }
}

impl<Item, Err, O, S> Observable<Item, Err, O> for SingleOp<S>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, SingleObserver<O, Item>>,
  Err: From<RxError>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self.source.actual_subscribe(SingleObserver { observer: Some(observer), value: None })
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for SingleOp<S> where S: ObservableExt<Item, Err> {}

pub struct SingleObserver<O, Item> {
  observer: Option<O>,
  value: Option<Item>,
}

impl<Item, Err, O> Observer<Item, Err> for SingleObserver<O, Item>
where
  O: Observer<Item, Err>,
  Err: From<RxError>,
{
  fn next(&mut self, value: Item) {
    if self.observer.is_none() {
      return;
    }
    if self.value.is_none() {
      self.value = Some(value);
    } else if let Some(observer) = self.observer.take() {
      self.value = None;
      observer.error(RxError::MultipleElements.into());
    }
  }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(self) {
    let Some(mut observer) = self.observer else { return };
    match self.value {
      Some(value) => {
        observer.next(value);
        observer.complete();
      }
      None => observer.error(RxError::NoElements.into()),
    }
  }

  #[inline]
  fn is_finished(&self) -> bool { Observer::<Item, Err>::is_finished(&self.observer) }
}
