use std::collections::VecDeque;

use super::{Subject, SubjectBuffer};
use crate::error::RxError;

/// Replays the last `capacity` values, oldest first, and then the terminal
/// signal if there is one, to every new subscriber.
pub type ReplaySubject<Item, Err = RxError> = Subject<Item, Err, ReplayWindow<Item>>;

/// Keeps the most recent values, up to an optional capacity.
#[derive(Clone, Debug)]
pub struct ReplayWindow<Item> {
  values: VecDeque<Item>,
  capacity: Option<usize>,
}

impl<Item: Clone> SubjectBuffer<Item> for ReplayWindow<Item> {
  fn record(&mut self, value: &Item) -> bool {
    if let Some(capacity) = self.capacity {
      if capacity == 0 {
        return true;
      }
      if self.values.len() == capacity {
        self.values.pop_front();
      }
    }
    self.values.push_back(value.clone());
    true
  }

  fn replay(&self) -> Vec<Item> { self.values.iter().cloned().collect() }
}

impl<Item, Err> Subject<Item, Err, ReplayWindow<Item>> {
  /// Keep at most `capacity` values.
  pub fn new(capacity: usize) -> Self {
    Self::with_buffer(ReplayWindow { values: VecDeque::with_capacity(capacity), capacity: Some(capacity) })
  }

  /// Keep every value.
  pub fn unbounded() -> Self { Self::with_buffer(ReplayWindow { values: VecDeque::new(), capacity: None }) }
}
