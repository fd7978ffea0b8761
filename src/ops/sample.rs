use std::thread;
use std::time::Duration;

use crossbeam_channel::{select, tick, unbounded};

use crate::observable::Observable;
use crate::observer::Observer;
use crate::signal::{Signal, SignalObserver};
use crate::subscription::{Subscription, SubscriptionLike};

/// Every `period`, emits the most recent source value since the last
/// tick; a tick with nothing new is skipped.
pub trait Sample: Observable {
  fn sample(self, period: Duration) -> SampleOp<Self> {
    SampleOp { source: self, period }
  }
}

impl<S: Observable> Sample for S {}

#[derive(Clone)]
pub struct SampleOp<S> {
  source: S,
  period: Duration,
}

impl<S: Observable> Observable for SampleOp<S> {
  type Item = S::Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let (tx, rx) = unbounded();
    self
      .source
      .actual_subscribe(SignalObserver { tx }, subscription.clone());
    let period = self.period;
    thread::spawn(move || {
      let ticker = tick(period);
      let mut latest = None;
      loop {
        select! {
          recv(rx) -> signal => match signal {
            Ok(Signal::Next(value)) => latest = Some(value),
            Ok(Signal::Error(err)) => {
              observer.error(err);
              return;
            }
            Ok(Signal::Complete) => {
              observer.complete();
              return;
            }
            Err(_) => return,
          },
          recv(ticker) -> _tick => {
            if subscription.is_closed() {
              return;
            }
            if let Some(value) = latest.take() {
              observer.next(value);
            }
          }
        }
      }
    });
  }
}
