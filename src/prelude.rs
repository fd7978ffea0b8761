//! One import for the whole surface: the core traits, the source
//! factories, every operator trait, and the subscription types.

pub use crate::error::RxError;
pub use crate::observable::{
  create, empty, from_array, from_channel, from_iter, interval, just, range,
  repeat, start, start_value, throw, Observable, Stream,
};
pub use crate::observer::{BoxObserver, NextObserver, Observer, ObserverAll};
pub use crate::ops::average::{Average, CountDiv};
pub use crate::ops::box_it::BoxIt;
pub use crate::ops::catch::Catch;
pub use crate::ops::collect::Collect;
pub use crate::ops::concat::Concat;
pub use crate::ops::count::Count;
pub use crate::ops::debounce::Debounce;
pub use crate::ops::distinct::Distinct;
pub use crate::ops::element_at::ElementAt;
pub use crate::ops::filter::Filter;
pub use crate::ops::first::First;
pub use crate::ops::flat_map::FlatMap;
pub use crate::ops::fork::Fork;
pub use crate::ops::ignore_elements::IgnoreElements;
pub use crate::ops::last::Last;
pub use crate::ops::map::Map;
pub use crate::ops::merge::Merge;
pub use crate::ops::merge_delay_error::MergeDelayError;
pub use crate::ops::minmax::MinMax;
pub use crate::ops::reduce::Reduce;
pub use crate::ops::replay::Replay;
pub use crate::ops::retry::Retry;
pub use crate::ops::sample::Sample;
pub use crate::ops::scan::Scan;
pub use crate::ops::skip_last::SkipLast;
pub use crate::ops::subscribe::Subscribe;
pub use crate::ops::sum::Sum;
pub use crate::ops::take::Take;
pub use crate::ops::take_last::TakeLast;
pub use crate::ops::tap::Tap;
pub use crate::ops::timeout::Timeout;
pub use crate::subscription::{
  ChannelSubscription, LinkedSubscription, Subscription, SubscriptionEvent,
  SubscriptionLike,
};
