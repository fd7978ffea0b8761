use std::thread;
use std::time::Duration;

use crossbeam_channel::tick;

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::{Subscription, SubscriptionLike};

/// Emits `0, 1, 2, …` spaced by `period`; never completes on its own.
/// The ticker is dropped as soon as the subscription closes, which is
/// the only way an interval ends.
#[derive(Clone)]
pub struct IntervalObservable {
  period: Duration,
}

pub fn interval(period: Duration) -> IntervalObservable {
  IntervalObservable { period }
}

impl Observable for IntervalObservable {
  type Item = i64;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<i64> + Send + 'static,
  {
    thread::spawn(move || {
      let ticker = tick(self.period);
      let mut counter: i64 = 0;
      while ticker.recv().is_ok() {
        if subscription.is_closed() {
          return;
        }
        observer.next(counter);
        counter += 1;
      }
    });
  }
}
