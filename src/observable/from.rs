use std::thread;

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::{Subscription, SubscriptionLike};

/// Emits each element of an iterator in order, then completes.
#[derive(Clone)]
pub struct IterObservable<I> {
  iter: I,
}

pub fn from_iter<I>(iter: I) -> IterObservable<I>
where
  I: IntoIterator,
{
  IterObservable { iter }
}

/// The array form: hand over a `Vec`, get its elements back as a stream.
pub fn from_array<Item>(values: Vec<Item>) -> IterObservable<Vec<Item>> {
  from_iter(values)
}

impl<I> Observable for IterObservable<I>
where
  I: IntoIterator + Send + 'static,
  I::Item: Send + 'static,
{
  type Item = I::Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<I::Item> + Send + 'static,
  {
    thread::spawn(move || {
      for value in self.iter {
        if subscription.is_closed() {
          return;
        }
        observer.next(value);
      }
      if !subscription.is_closed() {
        observer.complete();
      }
    });
  }
}

/// Emits a single value, then completes.
#[derive(Clone)]
pub struct JustObservable<Item> {
  value: Item,
}

pub fn just<Item>(value: Item) -> JustObservable<Item> {
  JustObservable { value }
}

impl<Item> Observable for JustObservable<Item>
where
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
      observer.next(self.value);
      if !subscription.is_closed() {
        observer.complete();
      }
    });
  }
}

/// Emits the same value `times` times, then completes.
#[derive(Clone)]
pub struct RepeatObservable<Item> {
  value: Item,
  times: usize,
}

pub fn repeat<Item>(value: Item, times: usize) -> RepeatObservable<Item>
where
  Item: Clone,
{
  RepeatObservable { value, times }
}

impl<Item> Observable for RepeatObservable<Item>
where
  Item: Clone + Send + 'static,
{
  type Item = Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<Item> + Send + 'static,
  {
    thread::spawn(move || {
      for _ in 0..self.times {
        if subscription.is_closed() {
          return;
        }
        observer.next(self.value.clone());
      }
      if !subscription.is_closed() {
        observer.complete();
      }
    });
  }
}
