//! The core push contract and the source factories.

use crate::observer::Observer;
use crate::subscription::Subscription;

mod boxed;
pub use boxed::Stream;
mod create;
pub use create::{create, CreateObservable};
mod from;
pub use from::{
  from_array, from_iter, just, repeat, IterObservable, JustObservable,
  RepeatObservable,
};
mod from_channel;
pub use from_channel::{from_channel, ChannelObservable};
mod interval;
pub use interval::{interval, IntervalObservable};
mod range;
pub use range::{range, RangeObservable};
mod start;
pub use start::{start, start_value, StartObservable};
mod trivial;
pub use trivial::{empty, throw, EmptyObservable, ThrowObservable};

/// A lazy producer of `Item`s.
///
/// `actual_subscribe` begins one production run into `observer`; the run
/// ends with exactly one terminal unless `subscription` closes first. A
/// source checks `is_closed` before every emission and stops as soon as
/// it reads `true`. Cold semantics come from values: re-subscription is a
/// `Clone` of the observable, and every factory here spawns a fresh
/// producer thread per call.
pub trait Observable: Sized {
  type Item: Send + 'static;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<Self::Item> + Send + 'static;
}
