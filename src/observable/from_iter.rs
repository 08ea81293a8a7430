use std::iter::Repeat;

use crate::{error::RxError, observable::*, observer::Observer};

/// Emit every element of `iter` in order, then complete.
///
/// Emission stops early once the downstream is finished, so an unbounded
/// iterator is fine as long as something downstream bounds it.
pub fn from_iter<Iter>(iter: Iter) -> ObservableIter<Iter>
where
  Iter: IntoIterator,
{
  ObservableIter(iter)
}

/// Emit `v` forever; only useful behind a bounding operator such as `take`.
pub fn repeat_element<Item>(v: Item) -> ObservableIter<Repeat<Item>>
where
  Item: Clone,
{
  from_iter(std::iter::repeat(v))
}

#[derive(Clone)]
pub struct ObservableIter<Iter>(Iter);

impl<O, Iter> Observable<Iter::Item, RxError, O> for ObservableIter<Iter>
where
  Iter: IntoIterator,
  O: Observer<Iter::Item, RxError>,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    for v in self.0 {
      if observer.is_finished() {
        return;
      }
      observer.next(v);
    }
    if !observer.is_finished() {
      observer.complete();
    }
  }
}

impl<Iter> ObservableExt<Iter::Item, RxError> for ObservableIter<Iter> where Iter: IntoIterator {}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[rxcore_macro::test]
  fn from_range() {
    let mut hit_count = 0;
    let mut completed = false;
    observable::from_iter(0..100)
      .on_complete(|| completed = true)
      .subscribe(|_| hit_count += 1);

    assert_eq!(hit_count, 100);
    assert!(completed);
  }

  #[rxcore_macro::test]
  fn from_vec() {
    let mut values = vec![];
    let mut completed = false;
    observable::from_iter(vec![3, 1, 2])
      .on_complete(|| completed = true)
      .subscribe(|v| values.push(v));

    assert_eq!(values, vec![3, 1, 2]);
    assert!(completed);
  }

  #[rxcore_macro::test]
  fn empty_iter_only_completes() {
    let mut hit_count = 0;
    let mut completed = false;
    observable::from_iter(Vec::<i32>::new())
      .on_complete(|| completed = true)
      .subscribe(|_| hit_count += 1);

    assert_eq!(hit_count, 0);
    assert!(completed);
  }

  #[rxcore_macro::test]
  fn repeat_element_is_bounded_by_take() {
    let mut values = vec![];
    let mut completed = false;
    observable::repeat_element("🐶")
      .take(3)
      .on_complete(|| completed = true)
      .subscribe(|v| values.push(v));

    assert_eq!(values, vec!["🐶"; 3]);
    assert!(completed);
  }
}
