use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

use crate::{
  observable::*,
  observer::Observer,
  rc::MutArc,
  subscription::{Subscription, SubscriptionBag},
  type_hint::TypeHint,
};

/// Mirrors the source until `trigger` emits a value or completes; then the
/// downstream completes and both subscriptions are dropped.
///
/// Trigger errors are ignored. When the trigger fires while a source value is
/// being delivered, the completion follows right after that delivery.
#[derive(Clone)]
pub struct TakeUntilOp<S, T, TItem, TErr> {
  pub(crate) source: S,
  pub(crate) trigger: T,
  pub(crate) _hint: TypeHint<(TItem, TErr)>,
}

impl<Item, Err, O, S, T, TItem, TErr> Observable<Item, Err, O> for TakeUntilOp<S, T, TItem, TErr>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, TakeUntilObserver<O>>,
  S::Unsub: Send + 'static,
  T: Observable<TItem, TErr, TakeUntilTrigger<O, Item, Err>>,
  T::Unsub: Send + 'static,
{
  type Unsub = SubscriptionBag;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let observer = MutArc::own(Some(observer));
    let triggered = Arc::new(AtomicBool::new(false));
    let bag = SubscriptionBag::new();

    let trigger_unsub = self.trigger.actual_subscribe(TakeUntilTrigger {
      observer: observer.clone(),
      triggered: triggered.clone(),
      bag: bag.clone(),
      _hint: TypeHint::new(),
    });
    bag.add(trigger_unsub);

    let source_unsub =
      self.source.actual_subscribe(TakeUntilObserver { observer, triggered, bag: bag.clone() });
    bag.add(source_unsub);
    bag
  }
}

impl<Item, Err, S, T, TItem, TErr> ObservableExt<Item, Err> for TakeUntilOp<S, T, TItem, TErr> where
  S: ObservableExt<Item, Err>
{
}

pub struct TakeUntilObserver<O> {
  observer: MutArc<Option<O>>,
  triggered: Arc<AtomicBool>,
  bag: SubscriptionBag,
}

impl<O> TakeUntilObserver<O> {
  // The trigger cannot take the observer while a delivery holds it; it only
  // raises the flag and the completion happens here once the lock is free.
  fn complete_if_triggered<Item, Err>(&self)
  where
    O: Observer<Item, Err>,
  {
    if self.triggered.load(Ordering::Acquire) {
      if let Some(observer) = self.observer.take() {
        observer.complete();
      }
    }
  }
}

impl<Item, Err, O> Observer<Item, Err> for TakeUntilObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = self.observer.rc_deref_mut().as_mut() {
      observer.next(value);
    }
    self.complete_if_triggered();
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.observer.take() {
      observer.error(err);
    }
    self.bag.unsubscribe();
  }

  fn complete(self) {
    if let Some(observer) = self.observer.take() {
      observer.complete();
    }
    self.bag.unsubscribe();
  }

  fn is_finished(&self) -> bool {
    let finished = self.observer.rc_deref_mut().as_ref().map_or(true, |o| o.is_finished());
    self.complete_if_triggered();
    finished || self.triggered.load(Ordering::Acquire)
  }
}

pub struct TakeUntilTrigger<O, Item, Err> {
  observer: MutArc<Option<O>>,
  triggered: Arc<AtomicBool>,
  bag: SubscriptionBag,
  _hint: TypeHint<(Item, Err)>,
}

impl<O, Item, Err> TakeUntilTrigger<O, Item, Err>
where
  O: Observer<Item, Err>,
{
  fn fire(&self) {
    if self.triggered.swap(true, Ordering::AcqRel) {
      return;
    }
    let observer = self.observer.try_rc_deref_mut().and_then(|mut slot| slot.take());
    if let Some(observer) = observer {
      observer.complete();
    }
    self.bag.clone().unsubscribe();
  }
}

impl<O, Item, Err, TItem, TErr> Observer<TItem, TErr> for TakeUntilTrigger<O, Item, Err>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, _: TItem) { self.fire() }

  #[inline]
  fn error(self, _: TErr) {}

  #[inline]
  fn complete(self) { self.fire() }

  #[inline]
  fn is_finished(&self) -> bool { self.triggered.load(Ordering::Acquire) }
}

#[cfg(test)]
mod test {
  use crate::{prelude::*, scheduler::TestScheduler};
  use std::{
    sync::{Arc, Mutex},
    time::Duration,
  };

  #[rxcore_macro::test]
  fn base_function() {
    let source = PublishSubject::<i32>::new();
    let trigger = PublishSubject::<()>::new();
    let values = Arc::new(Mutex::new(vec![]));
    let completed = Arc::new(Mutex::new(false));
    let (c_values, c_completed) = (values.clone(), completed.clone());

    source
      .clone()
      .take_until(trigger.clone())
      .on_complete(move || *c_completed.lock().unwrap() = true)
      .subscribe(move |v| c_values.lock().unwrap().push(v));

    source.next(1);
    source.next(2);
    trigger.next(());
    source.next(3);

    assert_eq!(*values.lock().unwrap(), vec![1, 2]);
    assert!(*completed.lock().unwrap());
    assert_eq!(source.subscriber_count(), 0);
    assert_eq!(trigger.subscriber_count(), 0);
  }

  #[rxcore_macro::test]
  fn trigger_completion_also_stops() {
    let source = PublishSubject::<i32>::new();
    let trigger = PublishSubject::<i32>::new();
    let values = Arc::new(Mutex::new(vec![]));
    let c_values = values.clone();

    source.clone().take_until(trigger.clone()).subscribe(move |v| c_values.lock().unwrap().push(v));
    source.next(1);
    trigger.complete();
    source.next(2);

    assert_eq!(*values.lock().unwrap(), vec![1]);
  }

  #[rxcore_macro::test]
  fn trigger_errors_are_ignored() {
    let source = PublishSubject::<i32>::new();
    let trigger = PublishSubject::<i32>::new();
    let values = Arc::new(Mutex::new(vec![]));
    let c_values = values.clone();

    source.clone().take_until(trigger.clone()).subscribe(move |v| c_values.lock().unwrap().push(v));
    trigger.error(RxError::message("ignored"));
    source.next(1);

    assert_eq!(*values.lock().unwrap(), vec![1]);
  }

  #[rxcore_macro::test]
  fn source_completion_drops_trigger() {
    let trigger = PublishSubject::<i32>::new();
    let values = Arc::new(Mutex::new(vec![]));
    let c_values = values.clone();
    observable::of!(1, 2, 3)
      .take_until(trigger.clone())
      .subscribe(move |v| c_values.lock().unwrap().push(v));
    assert_eq!(*values.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(trigger.subscriber_count(), 0);
  }

  #[rxcore_macro::test]
  fn trigger_fired_from_inside_a_delivery() {
    let source = PublishSubject::<i32>::new();
    let trigger = PublishSubject::<()>::new();
    let values = Arc::new(Mutex::new(vec![]));
    let completed = Arc::new(Mutex::new(false));
    let (c_values, c_completed, c_trigger) = (values.clone(), completed.clone(), trigger.clone());

    source
      .clone()
      .take_until(trigger.clone())
      .on_complete(move || *c_completed.lock().unwrap() = true)
      .subscribe(move |v| {
        c_values.lock().unwrap().push(v);
        if v == 2 {
          c_trigger.next(());
        }
      });

    source.next(1);
    source.next(2);
    source.next(3);
    assert_eq!(*values.lock().unwrap(), vec![1, 2]);
    assert!(*completed.lock().unwrap());
    assert_eq!(source.subscriber_count(), 0);
  }

  #[rxcore_macro::test]
  fn interval_until_timer() {
    let scheduler = TestScheduler::new();
    let values = Arc::new(Mutex::new(vec![]));
    let c_values = values.clone();
    observable::interval(Duration::from_millis(10), scheduler.clone())
      .take_until(observable::timer(Duration::from_millis(35), scheduler.clone()))
      .subscribe(move |v| c_values.lock().unwrap().push(v));

    scheduler.advance_by(Duration::from_millis(100));
    assert_eq!(*values.lock().unwrap(), vec![0, 1, 2]);
    assert_eq!(scheduler.pending_count(), 0);
  }
}
