use super::{Subject, SubjectBuffer};
use crate::error::RxError;

/// Emits only its last value, and only once it completes.
///
/// Values are withheld from observers; on completion every observer (current
/// or late) gets the last value, if any, followed by the completion. An error
/// discards the held value.
pub type AsyncSubject<Item, Err = RxError> = Subject<Item, Err, LastValue<Item>>;

/// Keeps the last value until completion.
#[derive(Clone, Debug)]
pub struct LastValue<Item> {
  value: Option<Item>,
  completed: bool,
}

impl<Item: Clone> SubjectBuffer<Item> for LastValue<Item> {
  fn record(&mut self, value: &Item) -> bool {
    self.value = Some(value.clone());
    false
  }

  fn replay(&self) -> Vec<Item> {
    match (&self.value, self.completed) {
      (Some(value), true) => vec![value.clone()],
      _ => Vec::new(),
    }
  }

  fn on_complete(&mut self) -> Option<Item> {
    self.completed = true;
    self.value.clone()
  }

  fn on_error(&mut self) { self.value = None; }
}

impl<Item, Err> Subject<Item, Err, LastValue<Item>> {
  pub fn new() -> Self { Self::with_buffer(LastValue { value: None, completed: false }) }
}

impl<Item, Err> Default for Subject<Item, Err, LastValue<Item>> {
  fn default() -> Self { Self::new() }
}
