use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::{Subscription, SubscriptionLike};

/// Resubscribes to the source whenever it errors — without a bound, so a
/// source that always fails loops until its subscription is closed.
pub trait Retry: Observable {
  fn retry(self) -> RetryOp<Self>
  where
    Self: Clone + Send + 'static,
  {
    RetryOp { source: self }
  }
}

impl<S: Observable> Retry for S {}

#[derive(Clone)]
pub struct RetryOp<S> {
  source: S,
}

impl<S> Observable for RetryOp<S>
where
  S: Observable + Clone + Send + 'static,
{
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let RetryOp { source } = self;
    source.clone().actual_subscribe(
      RetryObserver {
        source,
        observer: Some(observer),
        subscription: subscription.clone(),
      },
      subscription,
    );
  }
}

pub struct RetryObserver<S, O> {
  source: S,
  observer: Option<O>,
  subscription: Subscription,
}

impl<S, O> Observer<S::Item> for RetryObserver<S, O>
where
  S: Observable + Clone + Send + 'static,
  O: Observer<S::Item> + Send + 'static,
{
  fn next(&mut self, value: S::Item) {
    if let Some(observer) = self.observer.as_mut() {
      observer.next(value);
    }
  }

  fn error(&mut self, _err: RxError) {
    if self.subscription.is_closed() {
      return;
    }
    if let Some(observer) = self.observer.take() {
      self.source.clone().actual_subscribe(
        RetryObserver {
          source: self.source.clone(),
          observer: Some(observer),
          subscription: self.subscription.clone(),
        },
        self.subscription.clone(),
      );
    }
  }

  fn complete(&mut self) {
    if let Some(mut observer) = self.observer.take() {
      observer.complete();
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::prelude::*;
  use std::sync::atomic::{AtomicBool, Ordering};
  use std::sync::Arc;

  #[test]
  fn resubscribes_until_complete() {
    let errored = Arc::new(AtomicBool::new(false));
    let flag = errored.clone();
    let source = create(move |mut observer: BoxObserver<i32>, _sub: Subscription| {
      observer.next(1);
      observer.next(2);
      observer.next(3);
      if flag.swap(true, Ordering::SeqCst) {
        observer.complete();
      } else {
        observer.error("flaky".into());
      }
    });
    assert_eq!(source.retry().to_array(), vec![1, 2, 3, 1, 2, 3]);
    assert!(errored.load(Ordering::SeqCst));
  }
}
