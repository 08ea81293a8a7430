//! Prelude module for convenient imports.

pub use crate::{
  error::RxError,
  observable::{self, Observable, ObservableExt},
  observer::{Emitter, Observer},
  scheduler::{Scheduler, TaskHandle, TestScheduler},
  subject::{
    AsyncSubject, BehaviorRelay, BehaviorSubject, PublishRelay, PublishSubject, ReplaySubject,
    Subject,
  },
  subscription::{
    ClosureSubscription, DisposeBag, Subscription, SubscriptionBag, SubscriptionGuard,
    SubscriptionWrapper,
  },
};

#[cfg(feature = "tokio-scheduler")]
pub use crate::scheduler::TokioScheduler;
