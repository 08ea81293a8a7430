use crate::{error::RxError, observable::*, observer::Observer, type_hint::TypeHint};

/// Complete immediately without emitting.
pub fn empty<Item>() -> Empty<Item> { Empty(TypeHint::new()) }

/// Never emit and never terminate.
pub fn never<Item>() -> Never<Item> { Never(TypeHint::new()) }

/// Terminate immediately with `err`.
pub fn throw_err<Item>(err: RxError) -> ThrowErr<Item> { ThrowErr { err, _hint: TypeHint::new() } }

#[derive(Clone)]
pub struct Empty<Item>(TypeHint<Item>);

#[derive(Clone)]
pub struct Never<Item>(TypeHint<Item>);

#[derive(Clone)]
pub struct ThrowErr<Item> {
  err: RxError,
  _hint: TypeHint<Item>,
}

impl<Item, O> Observable<Item, RxError, O> for Empty<Item>
where
  O: Observer<Item, RxError>,
{
  type Unsub = ();

  #[inline]
  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.complete() }
}

impl<Item, O> Observable<Item, RxError, O> for Never<Item>
where
  O: Observer<Item, RxError>,
{
  type Unsub = ();

  #[inline]
  fn actual_subscribe(self, _: O) -> Self::Unsub {}
}

impl<Item, O> Observable<Item, RxError, O> for ThrowErr<Item>
where
  O: Observer<Item, RxError>,
{
  type Unsub = ();

  #[inline]
  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.error(self.err) }
}

impl<Item> ObservableExt<Item, RxError> for Empty<Item> {}
impl<Item> ObservableExt<Item, RxError> for Never<Item> {}
impl<Item> ObservableExt<Item, RxError> for ThrowErr<Item> {}
