//! Relays: subjects that only ever carry values.
//!
//! A relay has no `error` or `complete`, so it can never terminate. That
//! makes it a safe home for state that lives as long as the application.

use super::{BehaviorSubject, LatestValue, NoBuffer, PublishSubject, SubjectSubscription};
use crate::{
  error::RxError,
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// A [`PublishSubject`] without terminal signals.
pub struct PublishRelay<Item>(PublishSubject<Item>);

/// A [`BehaviorSubject`] without terminal signals.
pub struct BehaviorRelay<Item>(BehaviorSubject<Item>);

impl<Item> Clone for PublishRelay<Item> {
  fn clone(&self) -> Self { PublishRelay(self.0.clone()) }
}

impl<Item> Clone for BehaviorRelay<Item> {
  fn clone(&self) -> Self { BehaviorRelay(self.0.clone()) }
}

impl<Item: Clone> PublishRelay<Item> {
  pub fn new() -> Self { PublishRelay(PublishSubject::new()) }

  /// Emit `value` to every current observer.
  #[inline]
  pub fn accept(&self, value: Item) { self.0.next(value) }

  pub fn subscriber_count(&self) -> usize { self.0.subscriber_count() }
}

impl<Item: Clone> Default for PublishRelay<Item> {
  fn default() -> Self { Self::new() }
}

impl<Item: Clone> BehaviorRelay<Item> {
  pub fn new(initial: Item) -> Self { BehaviorRelay(BehaviorSubject::new(initial)) }

  /// Replace the current value and emit it.
  #[inline]
  pub fn accept(&self, value: Item) { self.0.next(value) }

  /// The current value.
  pub fn value(&self) -> Item {
    let core = self.0.core.rc_deref_mut();
    core.buffer.value.clone()
  }

  pub fn subscriber_count(&self) -> usize { self.0.subscriber_count() }
}

macro_rules! impl_relay_observable {
  ($relay:ident, $buffer:ty) => {
    impl<Item, O> Observable<Item, RxError, O> for $relay<Item>
    where
      O: Observer<Item, RxError> + Send + 'static,
      Item: Clone + 'static,
    {
      type Unsub = SubjectSubscription<Item, RxError, $buffer>;

      #[inline]
      fn actual_subscribe(self, observer: O) -> Self::Unsub { self.0.actual_subscribe(observer) }
    }

    impl<Item> ObservableExt<Item, RxError> for $relay<Item> {}
  };
}

impl_relay_observable!(PublishRelay, NoBuffer);
impl_relay_observable!(BehaviorRelay, LatestValue<Item>);
