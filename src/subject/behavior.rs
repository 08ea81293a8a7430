use super::{Subject, SubjectBuffer, Terminal};
use crate::error::RxError;

/// Holds a current value. Every new subscriber starts with it, then follows
/// the live signals.
///
/// After completion, late subscribers get the last value and the completion;
/// after an error, only the error.
pub type BehaviorSubject<Item, Err = RxError> = Subject<Item, Err, LatestValue<Item>>;

/// Keeps the most recent value.
#[derive(Clone, Debug)]
pub struct LatestValue<Item> {
  pub(super) value: Item,
  errored: bool,
}

impl<Item: Clone> SubjectBuffer<Item> for LatestValue<Item> {
  fn record(&mut self, value: &Item) -> bool {
    self.value = value.clone();
    true
  }

  fn replay(&self) -> Vec<Item> {
    if self.errored {
      Vec::new()
    } else {
      vec![self.value.clone()]
    }
  }

  fn on_error(&mut self) { self.errored = true; }
}

impl<Item, Err> Subject<Item, Err, LatestValue<Item>> {
  pub fn new(initial: Item) -> Self {
    Self::with_buffer(LatestValue { value: initial, errored: false })
  }

  /// The current value, or the error the subject terminated with.
  pub fn value(&self) -> Result<Item, Err>
  where
    Item: Clone,
    Err: Clone,
  {
    let core = self.core.rc_deref_mut();
    match &core.terminal {
      Some(Terminal::Error(err)) => Err(err.clone()),
      _ => Ok(core.buffer.value.clone()),
    }
  }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;
  use std::sync::{Arc, Mutex};

  #[rxcore_macro::test]
  fn seed_is_delivered_on_subscribe() {
    let subject = BehaviorSubject::<i32>::new(0);
    let values = Arc::new(Mutex::new(vec![]));
    let c_values = values.clone();
    subject.clone().subscribe(move |v| c_values.lock().unwrap().push(v));
    assert_eq!(*values.lock().unwrap(), vec![0]);

    subject.next(1);
    assert_eq!(*values.lock().unwrap(), vec![0, 1]);
  }

  #[rxcore_macro::test]
  fn late_subscriber_gets_the_latest_value() {
    let subject = BehaviorSubject::<&str>::new("seed");
    subject.next("a");
    subject.next("b");

    let values = Arc::new(Mutex::new(vec![]));
    let c_values = values.clone();
    subject.clone().subscribe(move |v| c_values.lock().unwrap().push(v));
    assert_eq!(*values.lock().unwrap(), vec!["b"]);
    assert_eq!(subject.value(), Ok("b"));
  }

  #[rxcore_macro::test]
  fn completed_replays_value_then_completion() {
    let subject = BehaviorSubject::<i32>::new(1);
    subject.next(2);
    subject.clone().complete();

    let log = Arc::new(Mutex::new(vec![]));
    let (l1, l2) = (log.clone(), log.clone());
    subject
      .clone()
      .on_complete(move || l2.lock().unwrap().push(-1))
      .subscribe(move |v| l1.lock().unwrap().push(v));
    assert_eq!(*log.lock().unwrap(), vec![2, -1]);
  }

  #[rxcore_macro::test]
  fn errored_replays_only_the_error() {
    let subject = BehaviorSubject::<i32>::new(1);
    subject.clone().error(RxError::message("down"));

    let values = Arc::new(Mutex::new(vec![]));
    let error = Arc::new(Mutex::new(None));
    let (c_values, c_error) = (values.clone(), error.clone());
    subject
      .clone()
      .on_error(move |e| *c_error.lock().unwrap() = Some(e.clone()))
      .subscribe(move |v| c_values.lock().unwrap().push(v));

    assert!(values.lock().unwrap().is_empty());
    assert_eq!(*error.lock().unwrap(), Some(RxError::message("down")));
    assert_eq!(subject.value(), Err(RxError::message("down")));
  }

  #[rxcore_macro::test]
  fn take_one_leaves_no_subscriber_behind() {
    let subject = BehaviorSubject::<i32>::new(5);
    let values = Arc::new(Mutex::new(vec![]));
    let c_values = values.clone();
    subject.clone().take(1).subscribe(move |v| c_values.lock().unwrap().push(v));
    assert_eq!(*values.lock().unwrap(), vec![5]);
    assert_eq!(subject.subscriber_count(), 0);
  }
}
