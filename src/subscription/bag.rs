use smallvec::SmallVec;

use super::{BoxedSubscription, Subscription};
use crate::rc::MutArc;

/// A composite subscription.
///
/// Disposing the bag disposes every member in insertion order and closes the
/// bag; anything added to a closed bag is disposed on the spot. Clones share
/// the same members. When the last clone is dropped the members still held
/// are disposed, so replacing a bag with a fresh one releases everything the
/// old one owned.
#[derive(Clone, Default)]
pub struct SubscriptionBag(MutArc<Inner>);

/// The name this pattern usually goes by in application code.
pub type DisposeBag = SubscriptionBag;

#[derive(Default)]
struct Inner {
  closed: bool,
  teardown: SmallVec<[BoxedSubscription; 2]>,
}

impl SubscriptionBag {
  #[inline]
  pub fn new() -> Self { Self::default() }

  pub fn add<U>(&self, subscription: U)
  where
    U: Subscription + Send + 'static,
  {
    let mut inner = self.0.rc_deref_mut();
    if inner.closed {
      drop(inner);
      subscription.unsubscribe();
    } else {
      inner.teardown.retain(|s| !s.is_closed());
      inner.teardown.push(BoxedSubscription::new(subscription));
    }
  }

  /// Number of members not yet disposed.
  pub fn len(&self) -> usize { self.0.rc_deref_mut().teardown.len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl Subscription for SubscriptionBag {
  fn unsubscribe(self) {
    let teardown = {
      let mut inner = self.0.rc_deref_mut();
      if inner.closed {
        return;
      }
      inner.closed = true;
      std::mem::take(&mut inner.teardown)
    };
    for subscription in teardown {
      subscription.unsubscribe();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.rc_deref_mut().closed }
}

impl Drop for Inner {
  fn drop(&mut self) {
    self.closed = true;
    for subscription in self.teardown.drain(..) {
      subscription.unsubscribe();
    }
  }
}
