use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Drops every value; only the terminal gets through.
pub trait IgnoreElements: Observable {
  fn ignore_elements(self) -> IgnoreElementsOp<Self> {
    IgnoreElementsOp { source: self }
  }
}

impl<S: Observable> IgnoreElements for S {}

#[derive(Clone)]
pub struct IgnoreElementsOp<S> {
  source: S,
}

impl<S: Observable> Observable for IgnoreElementsOp<S> {
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    self
      .source
      .actual_subscribe(IgnoreElementsObserver { observer }, subscription);
  }
}

pub struct IgnoreElementsObserver<O> {
  observer: O,
}

impl<Item, O> Observer<Item> for IgnoreElementsObserver<O>
where
  O: Observer<Item>,
{
  fn next(&mut self, _value: Item) {}

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    self.observer.complete()
  }
}
