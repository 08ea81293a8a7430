//! # rxcore: a small reactive-streams core
//!
//! Push-based event streams with explicit, idempotent cancellation.
//!
//! ```rust
//! use rxcore::prelude::*;
//!
//! let mut seen = vec![];
//! observable::from_iter(0..10)
//!   .skip_while(|v| *v < 3)
//!   .take(4)
//!   .subscribe(|v| seen.push(v));
//! assert_eq!(seen, vec![3, 4, 5, 6]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A lazy producer, activated once per subscription |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` signals |
//! | [`Subscription`] | Handle to cancel an active subscription |
//! | [`Subject`] | Both an observer and a multicasting observable |
//! | [`Scheduler`] | Execution context for time-based sources |
//!
//! ## Feature Flags
//!
//! - **`tokio-scheduler`** (default): a [`Scheduler`] backed by a tokio
//!   runtime.
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription
//! [`Subject`]: subject::Subject
//! [`Scheduler`]: scheduler::Scheduler

pub mod error;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod scheduler;
pub mod subject;
pub mod subscription;
pub mod type_hint;
