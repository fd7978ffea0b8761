use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Emits the running folds of the source: the first emission is
/// `f(seed, v0)`, the next `f(that, v1)`, and so on. The seed itself is
/// never emitted.
pub trait Scan: Observable {
  fn scan<B, F>(self, seed: B, func: F) -> ScanOp<Self, B, F>
  where
    B: Clone,
    F: FnMut(B, Self::Item) -> B,
  {
    ScanOp { source: self, seed, func }
  }
}

impl<S: Observable> Scan for S {}

#[derive(Clone)]
pub struct ScanOp<S, B, F> {
  source: S,
  seed: B,
  func: F,
}

impl<S, B, F> Observable for ScanOp<S, B, F>
where
  S: Observable,
  B: Clone + Send + 'static,
  F: FnMut(B, S::Item) -> B + Send + 'static,
{
  type Item = B;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<B> + Send + 'static,
  {
    let ScanOp { source, seed, func } = self;
    source.actual_subscribe(
      ScanObserver { observer, acc: Some(seed), func },
      subscription,
    );
  }
}

pub struct ScanObserver<O, B, F> {
  observer: O,
  acc: Option<B>,
  func: F,
}

impl<Item, B, O, F> Observer<Item> for ScanObserver<O, B, F>
where
  O: Observer<B>,
  B: Clone,
  F: FnMut(B, Item) -> B,
{
  fn next(&mut self, value: Item) {
    if let Some(acc) = self.acc.take() {
      let folded = (self.func)(acc, value);
      self.acc = Some(folded.clone());
      self.observer.next(folded);
    }
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    self.observer.complete()
  }
}
