//! Observables: lazy descriptions of event-producing computations.
//!
//! An observable is a value; subscribing consumes it, so every subscription
//! runs its own activation. Observables are cheap to `Clone` to subscribe more
//! than once.

mod create;
mod defer;
mod from_iter;
mod interval;
mod of;
mod subscribe;
mod trivial;

pub use create::{create, Create};
pub use defer::{defer, deferred, Defer};
pub use from_iter::{from_iter, repeat_element, ObservableIter};
pub use interval::{interval, interval_with_delay, timer, IntervalObservable, TimerObservable};
pub use crate::of;
pub use of::{just, ObservableOf};
pub use subscribe::{ObserverAll, ObserverN};
pub use trivial::{empty, never, throw_err, Empty, Never, ThrowErr};

use crate::{
  error::RxError,
  ops::{
    element_at::ElementAtOp, filter::FilterOp, finalize::FinalizeOp,
    ignore_elements::IgnoreElementsOp, lifecycle::{OnCompleteOp, OnErrorOp}, map::MapOp,
    single::SingleOp, skip::SkipOp, skip_until::SkipUntilOp, skip_while::SkipWhileOp,
    take::TakeOp, take_last::TakeLastOp, take_until::TakeUntilOp, take_while::TakeWhileOp,
  },
  subscription::{Subscription, SubscriptionWrapper},
  type_hint::TypeHint,
};

/// A source that can be subscribed by observer `O`.
pub trait Observable<Item, Err, O> {
  /// The handle returned by a subscription.
  type Unsub: Subscription;

  fn actual_subscribe(self, observer: O) -> Self::Unsub;
}

/// Operators and subscribe helpers, available on every observable.
pub trait ObservableExt<Item, Err>: Sized {
  /// Subscribe with a `next` callback; error and completion are ignored.
  #[allow(clippy::type_complexity)]
  fn subscribe<N>(
    self, next: N,
  ) -> SubscriptionWrapper<<Self as Observable<Item, Err, ObserverN<N>>>::Unsub>
  where
    N: FnMut(Item),
    Self: Observable<Item, Err, ObserverN<N>>,
  {
    SubscriptionWrapper(self.actual_subscribe(ObserverN::new(next)))
  }

  /// Subscribe with any [`Observer`](crate::observer::Observer).
  fn subscribe_with<O>(self, observer: O) -> SubscriptionWrapper<<Self as Observable<Item, Err, O>>::Unsub>
  where
    Self: Observable<Item, Err, O>,
  {
    SubscriptionWrapper(self.actual_subscribe(observer))
  }

  /// Subscribe with all four callbacks.
  ///
  /// `disposed` runs exactly once, after `error` or `complete`, or after the
  /// returned subscription is unsubscribed, whichever comes first.
  #[allow(clippy::type_complexity)]
  fn subscribe_all<N, E, C, D>(
    self, next: N, error: E, complete: C, disposed: D,
  ) -> SubscriptionWrapper<<FinalizeOp<Self, D> as Observable<Item, Err, ObserverAll<N, E, C>>>::Unsub>
  where
    N: FnMut(Item),
    E: FnOnce(Err),
    C: FnOnce(),
    D: FnOnce(),
    FinalizeOp<Self, D>: Observable<Item, Err, ObserverAll<N, E, C>>,
  {
    let observer = ObserverAll::new(next, error, complete);
    SubscriptionWrapper(self.on_disposed(disposed).actual_subscribe(observer))
  }

  /// Emit only the first `count` values, then complete and stop the source.
  #[inline]
  fn take(self, count: usize) -> TakeOp<Self> { TakeOp::new(self, count) }

  /// Discard the first `count` values.
  #[inline]
  fn skip(self, count: usize) -> SkipOp<Self> { SkipOp::new(self, count) }

  /// Discard values while `predicate` holds; once it fails, pass everything.
  #[inline]
  fn skip_while<F>(self, predicate: F) -> SkipWhileOp<Self, F>
  where
    F: FnMut(&Item) -> bool,
  {
    SkipWhileOp::new(self, predicate)
  }

  /// Discard values until `trigger` emits its first value.
  #[inline]
  fn skip_until<T, TItem, TErr>(self, trigger: T) -> SkipUntilOp<Self, T, TItem, TErr>
  where
    T: ObservableExt<TItem, TErr>,
  {
    SkipUntilOp { source: self, trigger, _hint: TypeHint::new() }
  }

  /// Emit values while `predicate` holds; complete on the first failure.
  #[inline]
  fn take_while<F>(self, predicate: F) -> TakeWhileOp<Self, F>
  where
    F: FnMut(&Item) -> bool,
  {
    TakeWhileOp::new(self, predicate)
  }

  /// Emit values until `trigger` emits or completes, then complete.
  #[inline]
  fn take_until<T, TItem, TErr>(self, trigger: T) -> TakeUntilOp<Self, T, TItem, TErr>
  where
    T: ObservableExt<TItem, TErr>,
  {
    TakeUntilOp { source: self, trigger, _hint: TypeHint::new() }
  }

  /// Emit only the last `count` values, once the source completes.
  #[inline]
  fn take_last(self, count: usize) -> TakeLastOp<Self> { TakeLastOp::new(self, count) }

  /// Emit only the value at zero-based `index`, then complete.
  ///
  /// Errors with [`RxError::IndexOutOfRange`] if the source completes first.
  #[inline]
  fn element_at(self, index: usize) -> ElementAtOp<Self>
  where
    Err: From<RxError>,
  {
    ElementAtOp::new(self, index)
  }

  /// Drop every value; keep only the terminal signal.
  #[inline]
  fn ignore_elements(self) -> IgnoreElementsOp<Self> { IgnoreElementsOp::new(self) }

  /// Emit the only value of the source.
  ///
  /// Errors with [`RxError::MultipleElements`] on a second value and with
  /// [`RxError::NoElements`] if the source completes empty.
  #[inline]
  fn single(self) -> SingleOp<Self>
  where
    Err: From<RxError>,
  {
    SingleOp::new(self)
  }

  #[inline]
  fn filter<F>(self, predicate: F) -> FilterOp<Self, F>
  where
    F: FnMut(&Item) -> bool,
  {
    FilterOp::new(self, predicate)
  }

  #[inline]
  fn map<B, F>(self, f: F) -> MapOp<Self, F, Item>
  where
    F: FnMut(Item) -> B,
  {
    MapOp::new(self, f)
  }

  /// Run `f` once when the subscription ends, by a terminal signal or by
  /// unsubscribe.
  #[inline]
  fn on_disposed<F>(self, f: F) -> FinalizeOp<Self, F>
  where
    F: FnOnce(),
  {
    FinalizeOp::new(self, f)
  }

  #[inline]
  fn on_error<F>(self, f: F) -> OnErrorOp<Self, F>
  where
    F: FnOnce(&Err),
  {
    OnErrorOp::new(self, f)
  }

  #[inline]
  fn on_complete<F>(self, f: F) -> OnCompleteOp<Self, F>
  where
    F: FnOnce(),
  {
    OnCompleteOp::new(self, f)
  }
}
