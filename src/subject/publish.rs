use super::{Subject, SubjectBuffer};
use crate::error::RxError;

/// Forwards live signals only; late subscribers see nothing that was emitted
/// before they arrived.
pub type PublishSubject<Item, Err = RxError> = Subject<Item, Err, NoBuffer>;

/// Keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBuffer;

impl<Item> SubjectBuffer<Item> for NoBuffer {
  #[inline]
  fn record(&mut self, _: &Item) -> bool { true }

  #[inline]
  fn replay(&self) -> Vec<Item> { Vec::new() }
}

impl<Item, Err> Subject<Item, Err, NoBuffer> {
  pub fn new() -> Self { Self::with_buffer(NoBuffer) }
}

impl<Item, Err> Default for Subject<Item, Err, NoBuffer> {
  fn default() -> Self { Self::new() }
}
