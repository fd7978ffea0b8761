use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Folds the whole source into one value, emitted when the source
/// completes. An empty source yields the seed.
pub trait Reduce: Observable {
  fn reduce<B, F>(self, seed: B, func: F) -> ReduceOp<Self, B, F>
  where
    F: FnMut(B, Self::Item) -> B,
  {
    ReduceOp { source: self, seed, func }
  }
}

impl<S: Observable> Reduce for S {}

#[derive(Clone)]
pub struct ReduceOp<S, B, F> {
  source: S,
  seed: B,
  func: F,
}

impl<S, B, F> Observable for ReduceOp<S, B, F>
where
  S: Observable,
  B: Send + 'static,
  F: FnMut(B, S::Item) -> B + Send + 'static,
{
  type Item = B;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<B> + Send + 'static,
  {
    let ReduceOp { source, seed, func } = self;
    source.actual_subscribe(
      ReduceObserver { observer, acc: Some(seed), func },
      subscription,
    );
  }
}

pub struct ReduceObserver<O, B, F> {
  observer: O,
  acc: Option<B>,
  func: F,
}

impl<Item, B, O, F> Observer<Item> for ReduceObserver<O, B, F>
where
  O: Observer<B>,
  F: FnMut(B, Item) -> B,
{
  fn next(&mut self, value: Item) {
    if let Some(acc) = self.acc.take() {
      self.acc = Some((self.func)(acc, value));
    }
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    if let Some(acc) = self.acc.take() {
      self.observer.next(acc);
    }
    self.observer.complete();
  }
}
