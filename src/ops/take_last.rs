use std::collections::VecDeque;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Buffers the tail of the source and emits the final `count` values
/// once it completes.
pub trait TakeLast: Observable {
  fn take_last(self, count: usize) -> TakeLastOp<Self> {
    TakeLastOp { source: self, count }
  }
}

impl<S: Observable> TakeLast for S {}

#[derive(Clone)]
pub struct TakeLastOp<S> {
  source: S,
  count: usize,
}

impl<S: Observable> Observable for TakeLastOp<S> {
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    self.source.actual_subscribe(
      TakeLastObserver {
        observer,
        count: self.count,
        buffer: VecDeque::new(),
      },
      subscription,
    );
  }
}

pub struct TakeLastObserver<O, Item> {
  observer: O,
  count: usize,
  buffer: VecDeque<Item>,
}

impl<Item, O> Observer<Item> for TakeLastObserver<O, Item>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) {
    if self.count == 0 {
      return;
    }
    if self.buffer.len() == self.count {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    for value in self.buffer.drain(..) {
      self.observer.next(value);
    }
    self.observer.complete();
  }
}
