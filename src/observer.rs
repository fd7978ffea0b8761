use crate::error::RxError;

/// A consumer of the values an observable produces: one method per
/// notification kind.
///
/// After `error` or `complete` no further call is permitted. Well behaved
/// sources uphold this, and everything downstream relies on it; sources
/// also never call an observer concurrently with itself, so observer
/// implementations need no internal locking.
pub trait Observer<Item> {
  fn next(&mut self, value: Item);
  fn error(&mut self, err: RxError);
  fn complete(&mut self);
}

/// An observer behind a box, the form multicast operators store and
/// `create` emitters receive.
pub type BoxObserver<Item> = Box<dyn Observer<Item> + Send>;

impl<Item> Observer<Item> for BoxObserver<Item> {
  fn next(&mut self, value: Item) {
    (**self).next(value)
  }

  fn error(&mut self, err: RxError) {
    (**self).error(err)
  }

  fn complete(&mut self) {
    (**self).complete()
  }
}

/// Observer assembled from three closures; `subscribe_all` builds one.
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  pub fn new(next: N, error: E, complete: C) -> Self {
    ObserverAll { next, error, complete }
  }
}

impl<Item, N, E, C> Observer<Item> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(RxError),
  C: FnMut(),
{
  fn next(&mut self, value: Item) {
    (self.next)(value)
  }

  fn error(&mut self, err: RxError) {
    (self.error)(err)
  }

  fn complete(&mut self) {
    (self.complete)()
  }
}

/// Next-only observer used by `subscribe_next`: completion is dropped and
/// an error ends the stream after being logged, since nobody is there to
/// consume it.
pub struct NextObserver<N> {
  next: N,
}

impl<N> NextObserver<N> {
  pub fn new(next: N) -> Self {
    NextObserver { next }
  }
}

impl<Item, N> Observer<Item> for NextObserver<N>
where
  N: FnMut(Item),
{
  fn next(&mut self, value: Item) {
    (self.next)(value)
  }

  fn error(&mut self, err: RxError) {
    log::error!("unhandled stream error: {}", err);
  }

  fn complete(&mut self) {}
}
