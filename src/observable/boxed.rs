use std::sync::{Arc, Mutex};

use crate::observable::Observable;
use crate::observer::{BoxObserver, Observer};
use crate::subscription::Subscription;

trait DynObservable<Item> {
  fn dyn_subscribe(
    &self,
    observer: BoxObserver<Item>,
    subscription: Subscription,
  );
}

// Clone-on-subscribe behind a mutex keeps the erased source
// re-subscribable without demanding `Sync` from user closures.
struct DynSource<S>(Mutex<S>);

impl<S> DynObservable<S::Item> for DynSource<S>
where
  S: Observable + Clone + Send,
{
  fn dyn_subscribe(
    &self,
    observer: BoxObserver<S::Item>,
    subscription: Subscription,
  ) {
    let source = self.0.lock().unwrap().clone();
    source.actual_subscribe(observer, subscription);
  }
}

/// A type-erased, cheaply clonable observable handle.
///
/// Operator chains have their full pipeline spelled out in their type;
/// `box_it()` collapses that into `Stream<Item>` so streams can be named
/// in signatures, stored together, or returned from `flat_map` closures
/// with different shapes. The generated typed facades alias this.
pub struct Stream<Item> {
  source: Arc<dyn DynObservable<Item> + Send + Sync>,
}

impl<Item> Clone for Stream<Item> {
  fn clone(&self) -> Self {
    Stream { source: self.source.clone() }
  }
}

impl<Item: Send + 'static> Stream<Item> {
  pub fn new<S>(source: S) -> Self
  where
    S: Observable<Item = Item> + Clone + Send + 'static,
  {
    Stream { source: Arc::new(DynSource(Mutex::new(source))) }
  }
}

impl<Item: Send + 'static> Observable for Stream<Item> {
  type Item = Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<Item> + Send + 'static,
  {
    self.source.dyn_subscribe(Box::new(observer), subscription);
  }
}
