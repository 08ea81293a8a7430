//! Operators. Each one is an `XxxOp` observable wrapping its source plus an
//! `XxxObserver` that it slips between the source and the downstream
//! observer. Operator state lives in the observer, so every subscription
//! starts fresh.

pub mod element_at;
pub mod filter;
pub mod finalize;
pub mod ignore_elements;
pub mod lifecycle;
pub mod map;
pub mod single;
pub mod skip;
pub mod skip_until;
pub mod skip_while;
pub mod take;
pub mod take_last;
pub mod take_until;
pub mod take_while;
