use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

use crate::{
  observable::*,
  observer::Observer,
  subscription::{Subscription, SubscriptionBag, TupleSubscription},
  type_hint::TypeHint,
};

/// Discards source values until `trigger` emits its first value.
///
/// The trigger is subscribed first and dropped as soon as it fires. Its
/// errors and completion are ignored: a trigger that ends without a value
/// keeps the gate shut. Source errors always pass; a source completion only
/// passes once the gate is open.
#[derive(Clone)]
pub struct SkipUntilOp<S, T, TItem, TErr> {
  pub(crate) source: S,
  pub(crate) trigger: T,
  pub(crate) _hint: TypeHint<(TItem, TErr)>,
}

impl<Item, Err, O, S, T, TItem, TErr> Observable<Item, Err, O> for SkipUntilOp<S, T, TItem, TErr>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, SkipUntilObserver<O>>,
  T: Observable<TItem, TErr, SkipUntilTrigger>,
  T::Unsub: Send + 'static,
{
  type Unsub = TupleSubscription<S::Unsub, SubscriptionBag>;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let allowed = Arc::new(AtomicBool::new(false));
    let trigger_bag = SubscriptionBag::new();

    let trigger_unsub = self
      .trigger
      .actual_subscribe(SkipUntilTrigger { allowed: allowed.clone(), bag: trigger_bag.clone() });
    trigger_bag.add(trigger_unsub);

    let source_unsub = self.source.actual_subscribe(SkipUntilObserver {
      observer,
      allowed,
      trigger: trigger_bag.clone(),
    });
    TupleSubscription::new(source_unsub, trigger_bag)
  }
}

impl<Item, Err, S, T, TItem, TErr> ObservableExt<Item, Err> for SkipUntilOp<S, T, TItem, TErr> where
  S: ObservableExt<Item, Err>
{
}

pub struct SkipUntilObserver<O> {
  observer: O,
  allowed: Arc<AtomicBool>,
  trigger: SubscriptionBag,
}

impl<Item, Err, O> Observer<Item, Err> for SkipUntilObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if self.allowed.load(Ordering::Acquire) {
      self.observer.next(value);
    }
  }

  fn error(self, err: Err) {
    self.trigger.unsubscribe();
    self.observer.error(err);
  }

  fn complete(self) {
    self.trigger.unsubscribe();
    if self.allowed.load(Ordering::Acquire) {
      self.observer.complete();
    }
  }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}

pub struct SkipUntilTrigger {
  allowed: Arc<AtomicBool>,
  bag: SubscriptionBag,
}

impl<TItem, TErr> Observer<TItem, TErr> for SkipUntilTrigger {
  fn next(&mut self, _: TItem) {
    if !self.allowed.swap(true, Ordering::AcqRel) {
      self.bag.clone().unsubscribe();
    }
  }

  #[inline]
  fn error(self, _: TErr) {}

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_finished(&self) -> bool { self.allowed.load(Ordering::Acquire) }
}
