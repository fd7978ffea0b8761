use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::rc::MutArc;
use crate::subscription::{Subscription, SubscriptionLike};

/// Blocking terminal operators. Each subscribes, parks the caller on a
/// terminal channel, and returns what the production left behind.
pub trait Collect: Observable {
  /// Every value in order; panics on a stream error. Use
  /// `to_array_with_error` to keep the error instead.
  fn to_array(self) -> Vec<Self::Item> {
    let (values, err) = self.to_array_with_error();
    if let Some(err) = err {
      panic!("stream failed: {}", err);
    }
    values
  }

  fn to_array_with_error(self) -> (Vec<Self::Item>, Option<RxError>) {
    let (done, terminal) = bounded(1);
    let values = MutArc::own(Vec::new());
    self.actual_subscribe(
      CollectObserver { values: values.clone(), done },
      Subscription::new(),
    );
    let err = terminal.recv().unwrap_or(None);
    let collected = std::mem::take(&mut *values.rc_deref_mut());
    (collected, err)
  }

  /// Exactly one element: `EmptySequence` when there is none, `TooMany`
  /// when a second shows up — at which point the upstream subscription
  /// is closed without waiting for the rest.
  fn to_one_with_error(self) -> Result<Self::Item, RxError> {
    let (done, terminal) = bounded(1);
    let subscription = Subscription::new();
    self.actual_subscribe(
      OneObserver {
        seen: None,
        done: Some(done),
        subscription: subscription.clone(),
      },
      subscription,
    );
    terminal.recv().unwrap_or(Err(RxError::EmptySequence))
  }

  fn to_one(self) -> Self::Item {
    match self.to_one_with_error() {
      Ok(value) => value,
      Err(err) => panic!("stream failed: {}", err),
    }
  }

  /// Values drain into the returned channel; the terminal closes it and
  /// errors are dropped on the floor. Dropping the receiver cancels the
  /// subscription at the next value.
  fn to_channel(self) -> Receiver<Self::Item> {
    let (tx, rx) = unbounded();
    let subscription = Subscription::new();
    self.actual_subscribe(
      ChannelSink { tx: Some(tx), subscription: subscription.clone() },
      subscription,
    );
    rx
  }

  /// Blocks until the source terminates.
  fn wait(self) -> Result<(), RxError> {
    let (done, terminal) = bounded(1);
    self.actual_subscribe(WaitObserver { done }, Subscription::new());
    terminal.recv().unwrap_or(Ok(()))
  }
}

impl<S: Observable> Collect for S {}

pub struct CollectObserver<Item> {
  values: MutArc<Vec<Item>>,
  done: Sender<Option<RxError>>,
}

impl<Item> Observer<Item> for CollectObserver<Item> {
  fn next(&mut self, value: Item) {
    self.values.rc_deref_mut().push(value);
  }

  fn error(&mut self, err: RxError) {
    let _ = self.done.send(Some(err));
  }

  fn complete(&mut self) {
    let _ = self.done.send(None);
  }
}

pub struct OneObserver<Item> {
  seen: Option<Item>,
  done: Option<Sender<Result<Item, RxError>>>,
  subscription: Subscription,
}

impl<Item> Observer<Item> for OneObserver<Item> {
  fn next(&mut self, value: Item) {
    if self.done.is_none() {
      return;
    }
    if self.seen.is_none() {
      self.seen = Some(value);
      return;
    }
    if let Some(done) = self.done.take() {
      let _ = done.send(Err(RxError::TooMany));
      self.subscription.close();
    }
  }

  fn error(&mut self, err: RxError) {
    if let Some(done) = self.done.take() {
      let _ = done.send(Err(err));
    }
  }

  fn complete(&mut self) {
    if let Some(done) = self.done.take() {
      let _ = done.send(match self.seen.take() {
        Some(value) => Ok(value),
        None => Err(RxError::EmptySequence),
      });
    }
  }
}

pub struct ChannelSink<Item> {
  tx: Option<Sender<Item>>,
  subscription: Subscription,
}

impl<Item> Observer<Item> for ChannelSink<Item> {
  fn next(&mut self, value: Item) {
    if let Some(tx) = &self.tx {
      if tx.send(value).is_err() {
        self.tx = None;
        self.subscription.close();
      }
    }
  }

  fn error(&mut self, _err: RxError) {
    self.tx = None;
  }

  fn complete(&mut self) {
    self.tx = None;
  }
}

pub struct WaitObserver {
  done: Sender<Result<(), RxError>>,
}

impl<Item> Observer<Item> for WaitObserver {
  fn next(&mut self, _value: Item) {}

  fn error(&mut self, err: RxError) {
    let _ = self.done.send(Err(err));
  }

  fn complete(&mut self) {
    let _ = self.done.send(Ok(()));
  }
}
