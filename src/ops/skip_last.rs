use std::collections::VecDeque;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Delays every value by `count` slots, so the final `count` values
/// never reach downstream.
pub trait SkipLast: Observable {
  fn skip_last(self, count: usize) -> SkipLastOp<Self> {
    SkipLastOp { source: self, count }
  }
}

impl<S: Observable> SkipLast for S {}

#[derive(Clone)]
pub struct SkipLastOp<S> {
  source: S,
  count: usize,
}

impl<S: Observable> Observable for SkipLastOp<S> {
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    self.source.actual_subscribe(
      SkipLastObserver {
        observer,
        count: self.count,
        buffer: VecDeque::new(),
      },
      subscription,
    );
  }
}

pub struct SkipLastObserver<O, Item> {
  observer: O,
  count: usize,
  buffer: VecDeque<Item>,
}

impl<Item, O> Observer<Item> for SkipLastObserver<O, Item>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) {
    self.buffer.push_back(value);
    if self.buffer.len() > self.count {
      if let Some(aged) = self.buffer.pop_front() {
        self.observer.next(aged);
      }
    }
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    self.observer.complete()
  }
}
