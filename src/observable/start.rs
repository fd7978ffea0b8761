use std::thread;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::{Subscription, SubscriptionLike};

/// Runs a function per subscription and emits its result: the value then
/// complete, or the error.
#[derive(Clone)]
pub struct StartObservable<F> {
  func: F,
}

pub fn start<F, Item>(func: F) -> StartObservable<F>
where
  F: FnOnce() -> Result<Item, RxError> + Clone + Send + 'static,
  Item: Send + 'static,
{
  StartObservable { func }
}

/// The infallible variant.
pub fn start_value<F, Item>(
  func: F,
) -> StartObservable<impl FnOnce() -> Result<Item, RxError> + Clone + Send + 'static>
where
  F: FnOnce() -> Item + Clone + Send + 'static,
  Item: Send + 'static,
{
  StartObservable { func: move || Ok(func()) }
}

impl<F, Item> Observable for StartObservable<F>
where
  F: FnOnce() -> Result<Item, RxError> + Clone + Send + 'static,
  Item: Send + 'static,
{
  type Item = Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<Item> + Send + 'static,
  {
    thread::spawn(move || {
      if subscription.is_closed() {
        return;
      }
      match (self.func)() {
        Ok(value) => {
          observer.next(value);
          if !subscription.is_closed() {
            observer.complete();
          }
        }
        Err(err) => observer.error(err),
      }
    });
  }
}
