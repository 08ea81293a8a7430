use std::{error::Error, sync::Arc};

use thiserror::Error;

/// Errors carried by the `Error` signal of a stream.
///
/// Producers report their own failures through [`RxError::User`]; the other
/// variants are raised by operators that put a constraint on the number of
/// elements a stream delivers.
#[derive(Debug, Clone, Error)]
pub enum RxError {
  /// An opaque error supplied by producer code.
  #[error("{0}")]
  User(Arc<dyn Error + Send + Sync>),

  /// `element_at(index)` saw the source complete after only `count` elements.
  #[error("element index {index} out of range, sequence completed after {count} elements")]
  IndexOutOfRange { index: usize, count: usize },

  /// A single-element operator saw a second qualifying element.
  #[error("sequence contains more than one element")]
  MultipleElements,

  /// A single-element operator saw the source complete without any element.
  #[error("sequence contains no elements")]
  NoElements,
}

#[derive(Debug, Error)]
#[error("{0}")]
struct Message(String);

impl RxError {
  /// Wrap a producer error.
  pub fn user<E>(err: E) -> Self
  where
    E: Error + Send + Sync + 'static,
  {
    RxError::User(Arc::new(err))
  }

  /// A producer error that only carries a message.
  pub fn message(msg: impl Into<String>) -> Self { RxError::User(Arc::new(Message(msg.into()))) }

  #[inline]
  pub fn is_user(&self) -> bool { matches!(self, RxError::User(_)) }
}

impl PartialEq for RxError {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (RxError::User(a), RxError::User(b)) => Arc::ptr_eq(a, b) || a.to_string() == b.to_string(),
      (
        RxError::IndexOutOfRange { index: i1, count: c1 },
        RxError::IndexOutOfRange { index: i2, count: c2 },
      ) => i1 == i2 && c1 == c2,
      (RxError::MultipleElements, RxError::MultipleElements) => true,
      (RxError::NoElements, RxError::NoElements) => true,
      _ => false,
    }
  }
}

impl From<std::io::Error> for RxError {
  fn from(err: std::io::Error) -> Self { RxError::user(err) }
}
