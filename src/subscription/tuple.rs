use super::Subscription;

/// Two subscriptions disposed together, first one first.
pub struct TupleSubscription<U1, U2> {
  unsub1: U1,
  unsub2: U2,
}

impl<U1, U2> TupleSubscription<U1, U2> {
  pub fn new(unsub1: U1, unsub2: U2) -> Self { TupleSubscription { unsub1, unsub2 } }
}

impl<U1, U2> Subscription for TupleSubscription<U1, U2>
where
  U1: Subscription,
  U2: Subscription,
{
  fn unsubscribe(self) {
    self.unsub1.unsubscribe();
    self.unsub2.unsubscribe();
  }

  fn is_closed(&self) -> bool { self.unsub1.is_closed() && self.unsub2.is_closed() }
}
