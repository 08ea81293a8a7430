//! Observer trait and implementations
//!
//! An observer receives a totally ordered sequence of signals: any number of
//! `next` calls followed by at most one `error` or `complete`. The terminal
//! methods consume the observer, so nothing can be delivered after them.

/// The consumer of a stream.
pub trait Observer<Item, Err> {
  /// Receive the next value.
  fn next(&mut self, value: Item);

  /// Receive the terminal error.
  fn error(self, err: Err);

  /// Receive the terminal completion.
  fn complete(self);

  /// Whether the observer will ignore anything further.
  ///
  /// Sources poll this to stop producing early, e.g. once a `take` has seen
  /// enough values or the subscription was disposed.
  fn is_finished(&self) -> bool;
}

/// Emission facade handed to the closure of [`create`](crate::observable::create).
///
/// All methods take `&mut self` so the closure can work against a
/// `&mut dyn Emitter` without knowing the concrete observer type. Signals
/// after a terminal one are ignored.
pub trait Emitter<Item, Err> {
  fn next(&mut self, value: Item);
  fn error(&mut self, err: Err);
  fn complete(&mut self);
  /// True once a terminal signal was sent or the downstream stopped listening.
  fn is_closed(&self) -> bool;
}

/// Object-safe mirror of [`Observer`].
pub trait DynObserver<Item, Err> {
  fn box_next(&mut self, value: Item);
  fn box_error(self: Box<Self>, err: Err);
  fn box_complete(self: Box<Self>);
  fn box_is_finished(&self) -> bool;
}

impl<T, Item, Err> DynObserver<Item, Err> for T
where
  T: Observer<Item, Err>,
{
  #[inline]
  fn box_next(&mut self, value: Item) { self.next(value) }

  #[inline]
  fn box_error(self: Box<Self>, err: Err) { (*self).error(err) }

  #[inline]
  fn box_complete(self: Box<Self>) { (*self).complete() }

  #[inline]
  fn box_is_finished(&self) -> bool { self.is_finished() }
}

/// A type-erased observer that can cross threads; what subjects store.
pub type BoxedObserver<Item, Err> = Box<dyn DynObserver<Item, Err> + Send>;

impl<Item, Err> Observer<Item, Err> for BoxedObserver<Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) { (**self).box_next(value) }

  #[inline]
  fn error(self, err: Err) { self.box_error(err) }

  #[inline]
  fn complete(self) { self.box_complete() }

  #[inline]
  fn is_finished(&self) -> bool { (**self).box_is_finished() }
}

/// `None` is an observer that has already finished.
impl<Item, Err, O> Observer<Item, Err> for Option<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) {
    if let Some(observer) = self {
      observer.next(value)
    }
  }

  #[inline]
  fn error(self, err: Err) {
    if let Some(observer) = self {
      observer.error(err)
    }
  }

  #[inline]
  fn complete(self) {
    if let Some(observer) = self {
      observer.complete()
    }
  }

  #[inline]
  fn is_finished(&self) -> bool { self.as_ref().map_or(true, |o| o.is_finished()) }
}

/// Adapts an [`Observer`] to the `&mut self` [`Emitter`] interface by keeping
/// it in an `Option` that terminal signals take from.
pub struct ObserverEmitter<O>(pub(crate) Option<O>);

impl<Item, Err, O> Emitter<Item, Err> for ObserverEmitter<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.0.next(value) }

  fn error(&mut self, err: Err) {
    if let Some(observer) = self.0.take() {
      observer.error(err)
    }
  }

  fn complete(&mut self) {
    if let Some(observer) = self.0.take() {
      observer.complete()
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { Observer::<Item, Err>::is_finished(&self.0) }
}
