use crate::{error::RxError, observable::*, observer::Observer};

/// Emit each argument in order, then complete. `of!()` is [`empty`].
///
/// ```
/// use rxcore::prelude::*;
///
/// let mut seen = vec![];
/// observable::of!(1, 2, 3).subscribe(|v| seen.push(v));
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! of {
  () => {
    $crate::observable::empty()
  };
  ( $( $item:expr ),+ $(,)? ) => {
    $crate::observable::from_iter([ $( $item ),* ])
  };
}

/// Emit `v` once, then complete.
pub fn just<Item>(v: Item) -> ObservableOf<Item> { ObservableOf(v) }

#[derive(Clone)]
pub struct ObservableOf<Item>(Item);

impl<Item, O> Observable<Item, RxError, O> for ObservableOf<Item>
where
  O: Observer<Item, RxError>,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    if !observer.is_finished() {
      observer.next(self.0);
      observer.complete();
    }
  }
}

impl<Item> ObservableExt<Item, RxError> for ObservableOf<Item> {}
