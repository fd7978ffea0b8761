use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::{Subscription, SubscriptionLike};

/// Emits only the first `count` values, completes, and closes its
/// upstream subscription so the producer stops.
pub trait Take: Observable {
  fn take(self, count: usize) -> TakeOp<Self> {
    TakeOp { source: self, count }
  }
}

impl<S: Observable> Take for S {}

#[derive(Clone)]
pub struct TakeOp<S> {
  source: S,
  count: usize,
}

impl<S: Observable> Observable for TakeOp<S> {
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let upstream = subscription.child();
    self.source.actual_subscribe(
      TakeObserver {
        observer: Some(observer),
        remaining: self.count,
        upstream: upstream.clone(),
      },
      upstream,
    );
  }
}

pub struct TakeObserver<O> {
  observer: Option<O>,
  remaining: usize,
  upstream: Subscription,
}

impl<Item, O> Observer<Item> for TakeObserver<O>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) {
    if self.remaining == 0 {
      // take(0): the first value triggers completion without emitting
      if let Some(mut observer) = self.observer.take() {
        observer.complete();
        self.upstream.close();
      }
      return;
    }
    if self.observer.is_none() {
      return;
    }
    if let Some(observer) = self.observer.as_mut() {
      observer.next(value);
    }
    self.remaining -= 1;
    if self.remaining == 0 {
      if let Some(mut observer) = self.observer.take() {
        observer.complete();
      }
      self.upstream.close();
    }
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

#[cfg(test)]
mod tests {
  use crate::prelude::*;

  #[test]
  fn takes_a_prefix() {
    let source = from_array(vec![1, 2, 3, 4, 5]);
    assert_eq!(source.clone().take(2).to_array(), vec![1, 2]);
    assert_eq!(source.take(3).to_array(), vec![1, 2, 3]);
  }

  #[test]
  fn shorter_source_just_completes() {
    assert_eq!(from_array(vec![1, 2]).take(5).to_array(), vec![1, 2]);
  }

  #[test]
  fn closes_upstream_after_fill() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let produced = Arc::new(AtomicUsize::new(0));
    let counter = produced.clone();
    let taken = from_iter(0..1000)
      .tap(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
      })
      .take(3)
      .to_array();
    assert_eq!(taken, vec![0, 1, 2]);
    assert_eq!(produced.load(Ordering::SeqCst), 3);
  }
}
