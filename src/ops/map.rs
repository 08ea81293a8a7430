use crate::{observable::*, observer::Observer, type_hint::TypeHint};

/// Applies a function to every value.
#[derive(Clone)]
pub struct MapOp<S, F, Item> {
  source: S,
  func: F,
  _hint: TypeHint<Item>,
}

impl<S, F, Item> MapOp<S, F, Item> {
  #[inline]
  pub(crate) fn new(source: S, func: F) -> Self { MapOp { source, func, _hint: TypeHint::new() } }
}

impl<Item, B, Err, O, S, F> Observable<B, Err, O> for MapOp<S, F, Item>
where
  O: Observer<B, Err>,
  S: Observable<Item, Err, MapObserver<O, F>>,
  F: FnMut(Item) -> B,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self.source.actual_subscribe(MapObserver { observer, func: self.func })
  }
}

impl<Item, B, Err, S, F> ObservableExt<B, Err> for MapOp<S, F, Item>
where
  S: ObservableExt<Item, Err>,
  F: FnMut(Item) -> B,
{
}

pub struct MapObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, B, Err, O, F> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<B, Err>,
  F: FnMut(Item) -> B,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next((self.func)(value)) }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[rxcore_macro::test]
  fn primitive_type() {
    let mut sum = 0;
    observable::from_iter(100..101).map(|v| v * 2).subscribe(|v| sum += v);
    assert_eq!(sum, 200);
  }

  #[rxcore_macro::test]
  fn changes_the_item_type() {
    let mut values = vec![];
    observable::of!(1, 2).map(|v| format!("#{v}")).subscribe(|v| values.push(v));
    assert_eq!(values, vec!["#1".to_string(), "#2".to_string()]);
  }

  #[rxcore_macro::test]
  fn fork_and_shared() {
    let mut counts = (0, 0);
    let mapped = observable::from_iter(0..10).map(|v| v + 1);
    mapped.clone().subscribe(|_| counts.0 += 1);
    mapped.filter(|v| *v > 5).subscribe(|_| counts.1 += 1);
    assert_eq!(counts, (10, 5));
  }
}
