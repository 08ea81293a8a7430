//! Subscriptions: the handle that ends the work started by a subscribe call.
//!
//! `unsubscribe` consumes the handle, so a single handle cannot be disposed
//! twice. Handles that are shared between clones ([`SubscriptionBag`], subject
//! subscriptions, `MutArc<Option<_>>` slots) keep a closed state so that every
//! call after the first is a no-op. Disposal never fails.

mod bag;
mod boxed;
mod tuple;

pub use bag::{DisposeBag, SubscriptionBag};
pub use boxed::BoxedSubscription;
pub use tuple::TupleSubscription;

pub trait Subscription {
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;
}

/// Nothing to release; used by synchronous sources that are already done
/// when `actual_subscribe` returns.
impl Subscription for () {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

impl<U: Subscription> Subscription for Option<U> {
  #[inline]
  fn unsubscribe(self) {
    if let Some(u) = self {
      u.unsubscribe()
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.as_ref().map_or(true, |u| u.is_closed()) }
}

/// Runs a teardown closure on unsubscribe.
pub struct ClosureSubscription<F>(F);

impl<F: FnOnce()> ClosureSubscription<F> {
  #[inline]
  pub fn new(teardown: F) -> Self { ClosureSubscription(teardown) }
}

impl<F: FnOnce()> Subscription for ClosureSubscription<F> {
  #[inline]
  fn unsubscribe(self) { (self.0)() }

  #[inline]
  fn is_closed(&self) -> bool { false }
}

/// What the `subscribe*` helpers return.
///
/// Dropping the wrapper leaves the subscription running; call
/// [`unsubscribe_when_dropped`](SubscriptionWrapper::unsubscribe_when_dropped)
/// to tie it to a scope, or [`disposed_by`](SubscriptionWrapper::disposed_by)
/// to hand it to a bag.
pub struct SubscriptionWrapper<T: Subscription>(pub(crate) T);

impl<T: Subscription> SubscriptionWrapper<T> {
  #[inline]
  pub fn new(subscription: T) -> Self { SubscriptionWrapper(subscription) }

  pub fn unsubscribe_when_dropped(self) -> SubscriptionGuard<T> { SubscriptionGuard::new(self.0) }

  pub fn disposed_by(self, bag: &SubscriptionBag)
  where
    T: Send + 'static,
  {
    bag.add(self.0)
  }

  #[inline]
  pub fn into_inner(self) -> T { self.0 }
}

impl<T: Subscription> Subscription for SubscriptionWrapper<T> {
  #[inline]
  fn unsubscribe(self) { self.0.unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.0.is_closed() }
}

/// Unsubscribes when dropped.
#[must_use]
pub struct SubscriptionGuard<T: Subscription>(Option<T>);

impl<T: Subscription> SubscriptionGuard<T> {
  #[inline]
  pub fn new(subscription: T) -> SubscriptionGuard<T> { SubscriptionGuard(Some(subscription)) }

  /// Give up the guard without unsubscribing.
  pub fn into_inner(mut self) -> Option<T> { self.0.take() }
}

impl<T: Subscription> Drop for SubscriptionGuard<T> {
  fn drop(&mut self) {
    if let Some(subscription) = self.0.take() {
      subscription.unsubscribe()
    }
  }
}
