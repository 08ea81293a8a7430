use tracing::debug;

use crate::{
  error::RxError,
  observable::*,
  observer::{Emitter, Observer, ObserverEmitter},
  subscription::Subscription,
  type_hint::TypeHint,
};

/// Build an observable from a producer closure.
///
/// The closure runs once per subscription, emits through the `Emitter` it is
/// given and returns the teardown for whatever it set up. The teardown runs
/// right away if the producer already terminated the stream (or the
/// downstream stopped listening); otherwise it is kept until the subscription
/// is unsubscribed.
///
/// ```
/// use rxcore::{prelude::*, subscription::ClosureSubscription};
///
/// let mut seen = vec![];
/// observable::create(|emitter: &mut dyn Emitter<i32, RxError>| {
///   emitter.next(1);
///   emitter.next(2);
///   emitter.complete();
///   ClosureSubscription::new(|| {})
/// })
/// .subscribe(|v| seen.push(v));
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub fn create<F, Item, U>(f: F) -> Create<F, Item, RxError>
where
  F: FnOnce(&mut dyn Emitter<Item, RxError>) -> U,
  U: Subscription,
{
  Create::new(f)
}

#[derive(Clone)]
pub struct Create<F, Item, Err> {
  f: F,
  _hint: TypeHint<(Item, Err)>,
}

impl<F, Item, Err> Create<F, Item, Err> {
  /// Like [`create`], for streams whose error type is not [`RxError`].
  pub fn new(f: F) -> Self { Create { f, _hint: TypeHint::new() } }
}

impl<F, Item, Err, O, U> Observable<Item, Err, O> for Create<F, Item, Err>
where
  O: Observer<Item, Err>,
  F: FnOnce(&mut dyn Emitter<Item, Err>) -> U,
  U: Subscription,
{
  type Unsub = Option<U>;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let mut emitter = ObserverEmitter(Some(observer));
    let teardown = (self.f)(&mut emitter);
    if Emitter::<Item, Err>::is_closed(&emitter) {
      teardown.unsubscribe();
      None
    } else {
      debug!("create: producer returned without a terminal signal, subscription stays open");
      Some(teardown)
    }
  }
}

impl<F, Item, Err> ObservableExt<Item, Err> for Create<F, Item, Err> {}

#[cfg(test)]
mod tests {
  use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
  };

  use crate::{prelude::*, subscription::ClosureSubscription};

  fn counter() -> (Arc<AtomicUsize>, ClosureSubscription<impl FnOnce()>) {
    let disposed = Arc::new(AtomicUsize::new(0));
    let c_disposed = disposed.clone();
    let teardown = ClosureSubscription::new(move || {
      c_disposed.fetch_add(1, Ordering::SeqCst);
    });
    (disposed, teardown)
  }

  #[rxcore_macro::test]
  fn next_and_complete() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let c_emitted = emitted.clone();
    let mut completed = false;

    observable::create(|emitter: &mut dyn Emitter<i32, RxError>| {
      emitter.next(1);
      emitter.next(2);
      emitter.complete();
      emitter.next(3);
    })
    .on_complete(|| completed = true)
    .subscribe(move |v| c_emitted.lock().unwrap().push(v));

    assert_eq!(*emitted.lock().unwrap(), vec![1, 2]);
    assert!(completed);
  }

  #[rxcore_macro::test]
  fn error_is_terminal() {
    let mut errors = vec![];
    let mut values = vec![];
    observable::create(|emitter: &mut dyn Emitter<i32, RxError>| {
      emitter.next(1);
      emitter.error(RxError::message("first"));
      emitter.error(RxError::message("second"));
      emitter.complete();
    })
    .on_error(|e| errors.push(e.to_string()))
    .subscribe(|v| values.push(v));

    assert_eq!(values, vec![1]);
    assert_eq!(errors, vec!["first"]);
  }

  #[rxcore_macro::test]
  fn runs_once_per_subscription() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c_calls = calls.clone();
    let o = observable::create(move |emitter: &mut dyn Emitter<&str, RxError>| {
      c_calls.fetch_add(1, Ordering::SeqCst);
      emitter.next("🐶");
      emitter.complete();
    });
    o.clone().subscribe(|_| {});
    o.subscribe(|_| {});
    assert_eq!(calls.load(Ordering::SeqCst), 2);
  }

  #[rxcore_macro::test]
  fn teardown_runs_after_terminal() {
    let (disposed, teardown) = counter();
    let subscription = observable::create(move |emitter: &mut dyn Emitter<i32, RxError>| {
      emitter.next(1);
      emitter.complete();
      teardown
    })
    .subscribe(|_| {});

    assert_eq!(disposed.load(Ordering::SeqCst), 1);
    assert!(subscription.is_closed());
    subscription.unsubscribe();
    assert_eq!(disposed.load(Ordering::SeqCst), 1);
  }

  #[rxcore_macro::test]
  fn open_subscription_keeps_teardown_until_unsubscribe() {
    let (disposed, teardown) = counter();
    let subscription = observable::create(move |emitter: &mut dyn Emitter<i32, RxError>| {
      emitter.next(1);
      teardown
    })
    .subscribe(|_| {});

    assert_eq!(disposed.load(Ordering::SeqCst), 0);
    assert!(!subscription.is_closed());
    subscription.unsubscribe();
    assert_eq!(disposed.load(Ordering::SeqCst), 1);
  }

  #[rxcore_macro::test]
  fn producer_sees_downstream_finish() {
    let (disposed, teardown) = counter();
    let mut values = vec![];
    observable::create(move |emitter: &mut dyn Emitter<usize, RxError>| {
      let mut i = 0;
      while !emitter.is_closed() {
        emitter.next(i);
        i += 1;
      }
      teardown
    })
    .take(3)
    .subscribe(|v| values.push(v));

    assert_eq!(values, vec![0, 1, 2]);
    assert_eq!(disposed.load(Ordering::SeqCst), 1);
  }
}
