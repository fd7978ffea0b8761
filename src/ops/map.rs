use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Calls a closure on each source value and emits its return. The
/// closure may change the element type, which is all the cross-type
/// mapping this library needs.
pub trait Map: Observable {
  fn map<B, F>(self, func: F) -> MapOp<Self, F>
  where
    F: FnMut(Self::Item) -> B,
  {
    MapOp { source: self, func }
  }
}

impl<S: Observable> Map for S {}

#[derive(Clone)]
pub struct MapOp<S, F> {
  source: S,
  func: F,
}

impl<S, B, F> Observable for MapOp<S, F>
where
  S: Observable,
  F: FnMut(S::Item) -> B + Send + 'static,
  B: Send + 'static,
{
  type Item = B;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<B> + Send + 'static,
  {
    let MapOp { source, func } = self;
    source.actual_subscribe(MapObserver { observer, func }, subscription);
  }
}

pub struct MapObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, B, O, F> Observer<Item> for MapObserver<O, F>
where
  O: Observer<B>,
  F: FnMut(Item) -> B,
{
  fn next(&mut self, value: Item) {
    self.observer.next((self.func)(value))
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    self.observer.complete()
  }
}
