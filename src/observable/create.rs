use std::marker::PhantomData;
use std::thread;

use crate::observable::Observable;
use crate::observer::{BoxObserver, Observer};
use crate::subscription::Subscription;

/// A user-defined source.
///
/// The emitter runs on its own thread, once per subscription, and gets
/// the boxed downstream observer plus the subscription it should honor.
/// The contract — check `is_closed` between values, at most one terminal
/// — is the emitter's to keep; the library does not police it.
pub struct CreateObservable<F, Item> {
  emitter: F,
  _hint: PhantomData<fn(Item)>,
}

pub fn create<F, Item>(emitter: F) -> CreateObservable<F, Item>
where
  F: FnOnce(BoxObserver<Item>, Subscription) + Clone + Send + 'static,
  Item: Send + 'static,
{
  CreateObservable { emitter, _hint: PhantomData }
}

impl<F: Clone, Item> Clone for CreateObservable<F, Item> {
  fn clone(&self) -> Self {
    CreateObservable { emitter: self.emitter.clone(), _hint: PhantomData }
  }
}

impl<F, Item> Observable for CreateObservable<F, Item>
where
  F: FnOnce(BoxObserver<Item>, Subscription) + Clone + Send + 'static,
  Item: Send + 'static,
{
  type Item = Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<Item> + Send + 'static,
  {
    let emitter = self.emitter;
    thread::spawn(move || emitter(Box::new(observer), subscription));
  }
}
