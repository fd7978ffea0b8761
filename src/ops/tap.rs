use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Side-effect taps; every signal passes through unchanged.
pub trait Tap: Observable {
  /// Observes each value by reference on its way past.
  fn tap<F>(self, func: F) -> TapOp<Self, F>
  where
    F: FnMut(&Self::Item),
  {
    TapOp { source: self, func }
  }

  /// Observes an error without consuming it.
  fn do_on_error<F>(self, func: F) -> TapErrorOp<Self, F>
  where
    F: FnMut(&RxError),
  {
    TapErrorOp { source: self, func }
  }

  fn do_on_complete<F>(self, func: F) -> TapCompleteOp<Self, F>
  where
    F: FnMut(),
  {
    TapCompleteOp { source: self, func }
  }
}

impl<S: Observable> Tap for S {}

#[derive(Clone)]
pub struct TapOp<S, F> {
  source: S,
  func: F,
}

impl<S, F> Observable for TapOp<S, F>
where
  S: Observable,
  F: FnMut(&S::Item) + Send + 'static,
{
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let TapOp { source, func } = self;
    source.actual_subscribe(TapObserver { observer, func }, subscription);
  }
}

pub struct TapObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, O, F> Observer<Item> for TapObserver<O, F>
where
  O: Observer<Item>,
  F: FnMut(&Item),
{
  fn next(&mut self, value: Item) {
    (self.func)(&value);
    self.observer.next(value);
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    self.observer.complete()
  }
}

#[derive(Clone)]
pub struct TapErrorOp<S, F> {
  source: S,
  func: F,
}

impl<S, F> Observable for TapErrorOp<S, F>
where
  S: Observable,
  F: FnMut(&RxError) + Send + 'static,
{
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let TapErrorOp { source, func } = self;
    source.actual_subscribe(TapErrorObserver { observer, func }, subscription);
  }
}

pub struct TapErrorObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, O, F> Observer<Item> for TapErrorObserver<O, F>
where
  O: Observer<Item>,
  F: FnMut(&RxError),
{
  fn next(&mut self, value: Item) {
    self.observer.next(value)
  }

  fn error(&mut self, err: RxError) {
    (self.func)(&err);
    self.observer.error(err);
  }

  fn complete(&mut self) {
    self.observer.complete()
  }
}

#[derive(Clone)]
pub struct TapCompleteOp<S, F> {
  source: S,
  func: F,
}

impl<S, F> Observable for TapCompleteOp<S, F>
where
  S: Observable,
  F: FnMut() + Send + 'static,
{
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let TapCompleteOp { source, func } = self;
    source
      .actual_subscribe(TapCompleteObserver { observer, func }, subscription);
  }
}

pub struct TapCompleteObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, O, F> Observer<Item> for TapCompleteObserver<O, F>
where
  O: Observer<Item>,
  F: FnMut(),
{
  fn next(&mut self, value: Item) {
    self.observer.next(value)
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    (self.func)();
    self.observer.complete();
  }
}
