use std::marker::PhantomData;

/// Zero-sized marker that pins type parameters an operator only needs in its
/// trait impls. `fn() -> T` keeps the marker `Send + Sync` whatever `T` is.
pub struct TypeHint<T>(PhantomData<fn() -> T>);

impl<T> TypeHint<T> {
  #[inline]
  pub fn new() -> Self { TypeHint(PhantomData) }
}

impl<T> Default for TypeHint<T> {
  #[inline]
  fn default() -> Self { Self::new() }
}

impl<T> Clone for TypeHint<T> {
  #[inline]
  fn clone(&self) -> Self { Self::new() }
}

impl<T> Copy for TypeHint<T> {}
