//! Cancellation handles.
//!
//! A subscription is a monotonic closed flag with callback fan-out:
//! `close` is idempotent, `is_closed` never goes back to `false`, and
//! close callbacks run exactly once, in registration order. Operators
//! compose handles into trees with [`Subscription::child`]; closing the
//! root closes every descendant, which is how cancellation reaches the
//! producer threads.

use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crossbeam_channel::{bounded, Receiver};

use crate::error::RxError;

type CloseCallback = Box<dyn FnOnce() + Send>;

/// The capability set every cancellation handle offers.
pub trait SubscriptionLike {
  /// Stop the production this handle owns. Idempotent.
  fn close(&self);

  fn is_closed(&self) -> bool;

  /// Register `f` to run on close; it runs immediately when the handle
  /// is already closed.
  fn on_close(&self, f: CloseCallback);
}

#[derive(Default)]
struct Inner {
  closed: AtomicBool,
  callbacks: Mutex<Vec<CloseCallback>>,
}

/// The generic subscription: a shared closed flag with callback fan-out.
#[derive(Clone, Default)]
pub struct Subscription(Arc<Inner>);

impl Subscription {
  pub fn new() -> Self {
    Self::default()
  }

  /// Derive a handle that closes when `self` closes, but can also be
  /// closed on its own. Operators that cancel their upstream (`take`,
  /// `timeout`, …) subscribe the upstream with a child so the rest of
  /// the chain stays untouched.
  pub fn child(&self) -> Subscription {
    let child = Subscription::new();
    let handle = child.clone();
    self.on_close(Box::new(move || handle.close()));
    child
  }
}

impl SubscriptionLike for Subscription {
  fn close(&self) {
    if !self.0.closed.swap(true, Ordering::AcqRel) {
      // Callbacks run outside the lock: a callback may close further
      // subscriptions, which re-enters this code on other instances.
      let callbacks = mem::take(&mut *self.0.callbacks.lock().unwrap());
      for callback in callbacks {
        callback();
      }
    }
  }

  fn is_closed(&self) -> bool {
    self.0.closed.load(Ordering::Acquire)
  }

  fn on_close(&self, f: CloseCallback) {
    let mut callbacks = self.0.callbacks.lock().unwrap();
    if self.is_closed() {
      drop(callbacks);
      f();
    } else {
      callbacks.push(f);
    }
  }
}

/// A handle that may be bound to at most one target subscription.
///
/// Closing the handle closes the target; binding onto an already closed
/// handle closes the target on the spot. A second bind fails with
/// [`RxError::LinkAlreadyBound`].
#[derive(Clone, Default)]
pub struct LinkedSubscription {
  inner: Subscription,
  target: Arc<Mutex<Option<Box<dyn SubscriptionLike + Send>>>>,
}

impl LinkedSubscription {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn link<S>(&self, target: S) -> Result<(), RxError>
  where
    S: SubscriptionLike + Send + 'static,
  {
    let mut slot = self.target.lock().unwrap();
    if self.inner.is_closed() {
      target.close();
      return Ok(());
    }
    if slot.is_some() {
      return Err(RxError::LinkAlreadyBound);
    }
    *slot = Some(Box::new(target));
    Ok(())
  }
}

impl SubscriptionLike for LinkedSubscription {
  fn close(&self) {
    self.inner.close();
    let target = self.target.lock().unwrap().take();
    if let Some(target) = target {
      target.close();
    }
  }

  fn is_closed(&self) -> bool {
    self.inner.is_closed()
  }

  fn on_close(&self, f: CloseCallback) {
    self.inner.on_close(f)
  }
}

/// Close event published by a [`ChannelSubscription`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionEvent {
  Closed,
}

/// Generic subscription that also announces its close on a bounded
/// channel, for code that prefers event-driven cancellation.
#[derive(Clone)]
pub struct ChannelSubscription {
  inner: Subscription,
  events: Receiver<SubscriptionEvent>,
}

impl ChannelSubscription {
  pub fn new() -> Self {
    let inner = Subscription::new();
    let (tx, events) = bounded(1);
    inner.on_close(Box::new(move || {
      let _ = tx.try_send(SubscriptionEvent::Closed);
    }));
    ChannelSubscription { inner, events }
  }

  /// The channel the `Closed` sentinel arrives on.
  pub fn events(&self) -> Receiver<SubscriptionEvent> {
    self.events.clone()
  }
}

impl Default for ChannelSubscription {
  fn default() -> Self {
    Self::new()
  }
}

impl SubscriptionLike for ChannelSubscription {
  fn close(&self) {
    self.inner.close()
  }

  fn is_closed(&self) -> bool {
    self.inner.is_closed()
  }

  fn on_close(&self, f: CloseCallback) {
    self.inner.on_close(f)
  }
}
