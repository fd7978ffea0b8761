use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::{Subscription, SubscriptionLike};

/// Emits only the zero-indexed `index`-th value, completes, and closes
/// its upstream subscription.
pub trait ElementAt: Observable {
  fn element_at(self, index: usize) -> ElementAtOp<Self> {
    ElementAtOp { source: self, index }
  }
}

impl<S: Observable> ElementAt for S {}

#[derive(Clone)]
pub struct ElementAtOp<S> {
  source: S,
  index: usize,
}

impl<S: Observable> Observable for ElementAtOp<S> {
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let upstream = subscription.child();
    self.source.actual_subscribe(
      ElementAtObserver {
        observer: Some(observer),
        remaining: self.index,
        upstream: upstream.clone(),
      },
      upstream,
    );
  }
}

pub struct ElementAtObserver<O> {
  observer: Option<O>,
  remaining: usize,
  upstream: Subscription,
}

impl<Item, O> Observer<Item> for ElementAtObserver<O>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) {
    if self.observer.is_none() {
      return;
    }
    if self.remaining > 0 {
      self.remaining -= 1;
      return;
    }
    if let Some(mut observer) = self.observer.take() {
      observer.next(value);
      observer.complete();
    }
    self.upstream.close();
  }

  fn error(&mut self, err: RxError) {
    if let Some(mut observer) = self.observer.take() {
      observer.error(err)
    }
  }

  fn complete(&mut self) {
    if let Some(mut observer) = self.observer.take() {
      observer.complete()
    }
  }
}
