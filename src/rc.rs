use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::subscription::Subscription;

/// Shared, thread-safe mutable cell used for state that an operator splits
/// between its observer half and its subscription half.
pub struct MutArc<T>(Arc<Mutex<T>>);

impl<T> MutArc<T> {
  #[inline]
  pub fn own(t: T) -> Self { Self(Arc::new(Mutex::new(t))) }

  #[inline]
  pub fn rc_deref_mut(&self) -> MutexGuard<'_, T> { self.0.lock() }

  /// Lock without blocking; `None` if the cell is held elsewhere, including by
  /// the current thread.
  #[inline]
  pub fn try_rc_deref_mut(&self) -> Option<MutexGuard<'_, T>> { self.0.try_lock() }

  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl<T> MutArc<Option<T>> {
  /// Take the value out, releasing the lock before returning.
  #[inline]
  pub fn take(&self) -> Option<T> { self.0.lock().take() }
}

impl<T> Clone for MutArc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T: Default> Default for MutArc<T> {
  fn default() -> Self { Self::own(T::default()) }
}

impl<T> From<T> for MutArc<T> {
  #[inline]
  fn from(t: T) -> Self { Self::own(t) }
}

impl<U: Subscription> Subscription for MutArc<Option<U>> {
  fn unsubscribe(self) {
    if let Some(inner) = self.take() {
      inner.unsubscribe();
    }
  }

  fn is_closed(&self) -> bool { self.rc_deref_mut().as_ref().map_or(true, |u| u.is_closed()) }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::subscription::ClosureSubscription;
  use std::sync::atomic::{AtomicUsize, Ordering};

  #[rxcore_macro::test]
  fn shared_slot_unsubscribes_once() {
    let hits = Arc::new(AtomicUsize::new(0));
    let c_hits = hits.clone();
    let slot = MutArc::own(Some(ClosureSubscription::new(move || {
      c_hits.fetch_add(1, Ordering::SeqCst);
    })));
    let other = slot.clone();
    assert!(!slot.is_closed());
    slot.unsubscribe();
    assert!(other.is_closed());
    other.unsubscribe();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
  }

  #[rxcore_macro::test]
  fn try_lock_fails_while_held() {
    let cell = MutArc::own(1);
    let guard = cell.rc_deref_mut();
    assert!(cell.try_rc_deref_mut().is_none());
    drop(guard);
    assert_eq!(cell.try_rc_deref_mut().map(|v| *v), Some(1));
  }
}
