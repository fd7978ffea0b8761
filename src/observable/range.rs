use std::thread;

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::{Subscription, SubscriptionLike};

/// Emits `start, start + 1, …` — `count` values in all — then completes.
/// Start-inclusive; `count` is a length, not an end bound.
#[derive(Clone)]
pub struct RangeObservable {
  start: i64,
  count: usize,
}

pub fn range(start: i64, count: usize) -> RangeObservable {
  RangeObservable { start, count }
}

impl Observable for RangeObservable {
  type Item = i64;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<i64> + Send + 'static,
  {
    thread::spawn(move || {
      for offset in 0..self.count {
        if subscription.is_closed() {
          return;
        }
        observer.next(self.start + offset as i64);
      }
      if !subscription.is_closed() {
        observer.complete();
      }
    });
  }
}

#[cfg(test)]
mod tests {
  use crate::prelude::*;

  #[test]
  fn start_inclusive_count_elements() {
    let source = range(1, 5);
    assert_eq!(source.clone().to_array(), vec![1, 2, 3, 4, 5]);
    assert_eq!(source.to_array(), vec![1, 2, 3, 4, 5]);
    assert_eq!(range(0, 5).to_array(), vec![0, 1, 2, 3, 4]);
  }
}
