use std::collections::HashSet;
use std::hash::Hash;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Drops values already seen. The seen-set grows with the number of
/// distinct values, so memory is `O(|seen|)`.
pub trait Distinct: Observable {
  fn distinct(self) -> DistinctOp<Self>
  where
    Self::Item: Clone + Eq + Hash,
  {
    DistinctOp { source: self }
  }
}

impl<S: Observable> Distinct for S {}

#[derive(Clone)]
pub struct DistinctOp<S> {
  source: S,
}

impl<S> Observable for DistinctOp<S>
where
  S: Observable,
  S::Item: Clone + Eq + Hash,
{
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    self.source.actual_subscribe(
      DistinctObserver { observer, seen: HashSet::new() },
      subscription,
    );
  }
}

pub struct DistinctObserver<O, Item> {
  observer: O,
  seen: HashSet<Item>,
}

impl<Item, O> Observer<Item> for DistinctObserver<O, Item>
where
  O: Observer<Item>,
  Item: Clone + Eq + Hash,
{
  fn next(&mut self, value: Item) {
    if self.seen.insert(value.clone()) {
      self.observer.next(value)
    }
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    self.observer.complete()
  }
}
