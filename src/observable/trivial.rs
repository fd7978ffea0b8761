use std::marker::PhantomData;
use std::thread;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::{Subscription, SubscriptionLike};

/// Completes immediately, emitting nothing.
pub struct EmptyObservable<Item> {
  _hint: PhantomData<fn(Item)>,
}

pub fn empty<Item>() -> EmptyObservable<Item> {
  EmptyObservable { _hint: PhantomData }
}

impl<Item> Clone for EmptyObservable<Item> {
  fn clone(&self) -> Self {
    EmptyObservable { _hint: PhantomData }
  }
}

impl<Item> Observable for EmptyObservable<Item>
where
  Item: Send + 'static,
{
  type Item = Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<Item> + Send + 'static,
  {
    thread::spawn(move || {
      if !subscription.is_closed() {
        observer.complete();
      }
    });
  }
}

/// Errors immediately.
pub struct ThrowObservable<Item> {
  err: RxError,
  _hint: PhantomData<fn(Item)>,
}

pub fn throw<Item>(err: RxError) -> ThrowObservable<Item> {
  ThrowObservable { err, _hint: PhantomData }
}

impl<Item> Clone for ThrowObservable<Item> {
  fn clone(&self) -> Self {
    ThrowObservable { err: self.err.clone(), _hint: PhantomData }
  }
}

impl<Item> Observable for ThrowObservable<Item>
where
  Item: Send + 'static,
{
  type Item = Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<Item> + Send + 'static,
  {
    thread::spawn(move || {
      if !subscription.is_closed() {
        observer.error(self.err);
      }
    });
  }
}
