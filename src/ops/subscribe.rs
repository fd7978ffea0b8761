use crate::observable::Observable;
use crate::observer::{NextObserver, Observer, ObserverAll};
use crate::subscription::Subscription;

/// Subscription entry points. Each starts one production run and hands
/// back the subscription that cancels it.
pub trait Subscribe: Observable {
  fn subscribe<O>(self, observer: O) -> Subscription
  where
    O: Observer<Self::Item> + Send + 'static,
  {
    let subscription = Subscription::new();
    self.actual_subscribe(observer, subscription.clone());
    subscription
  }

  /// Calls `next` per value; terminals are dropped, errors logged.
  fn subscribe_next<N>(self, next: N) -> Subscription
  where
    N: FnMut(Self::Item) + Send + 'static,
  {
    self.subscribe(NextObserver::new(next))
  }

  fn subscribe_all<N, E, C>(self, next: N, error: E, complete: C) -> Subscription
  where
    N: FnMut(Self::Item) + Send + 'static,
    E: FnMut(crate::error::RxError) + Send + 'static,
    C: FnMut() + Send + 'static,
  {
    self.subscribe(ObserverAll::new(next, error, complete))
  }
}

impl<S: Observable> Subscribe for S {}
