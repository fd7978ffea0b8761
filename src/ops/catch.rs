use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Swaps to `fallback` when the source errors. The error is consumed;
/// downstream only ever sees the fallback's signals after that point.
pub trait Catch: Observable {
  fn catch<S2>(self, fallback: S2) -> CatchOp<Self, S2>
  where
    S2: Observable<Item = Self::Item>,
  {
    CatchOp { source: self, fallback }
  }
}

impl<S: Observable> Catch for S {}

#[derive(Clone)]
pub struct CatchOp<S, S2> {
  source: S,
  fallback: S2,
}

impl<S, S2> Observable for CatchOp<S, S2>
where
  S: Observable,
  S2: Observable<Item = S::Item> + Send + 'static,
{
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    self.source.actual_subscribe(
      CatchObserver {
        observer: Some(observer),
        fallback: Some(self.fallback),
        subscription: subscription.clone(),
      },
      subscription,
    );
  }
}

pub struct CatchObserver<O, S2> {
  observer: Option<O>,
  fallback: Option<S2>,
  subscription: Subscription,
}

impl<Item, O, S2> Observer<Item> for CatchObserver<O, S2>
where
  Item: Send + 'static,
  O: Observer<Item> + Send + 'static,
  S2: Observable<Item = Item>,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = self.observer.as_mut() {
      observer.next(value);
    }
  }

  fn error(&mut self, _err: RxError) {
    if let (Some(observer), Some(fallback)) =
      (self.observer.take(), self.fallback.take())
    {
      fallback.actual_subscribe(observer, self.subscription.clone());
    }
  }

  fn complete(&mut self) {
    if let Some(mut observer) = self.observer.take() {
      observer.complete();
    }
  }
}
