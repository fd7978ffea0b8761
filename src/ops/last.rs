use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Holds the most recent value and emits it when the source completes;
/// an empty source just completes.
pub trait Last: Observable {
  fn last(self) -> LastOp<Self> {
    LastOp { source: self }
  }
}

impl<S: Observable> Last for S {}

#[derive(Clone)]
pub struct LastOp<S> {
  source: S,
}

impl<S: Observable> Observable for LastOp<S> {
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    self
      .source
      .actual_subscribe(LastObserver { observer, last: None }, subscription);
  }
}

pub struct LastObserver<O, Item> {
  observer: O,
  last: Option<Item>,
}

impl<Item, O> Observer<Item> for LastObserver<O, Item>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) {
    self.last = Some(value);
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    if let Some(value) = self.last.take() {
      self.observer.next(value);
    }
    self.observer.complete();
  }
}

#[cfg(test)]
mod tests {
  use crate::prelude::*;

  #[test]
  fn emits_only_the_last() {
    assert_eq!(from_array(vec![1, 2, 3, 4]).last().to_array(), vec![4]);
  }
}
