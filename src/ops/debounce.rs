use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, RecvTimeoutError};

use crate::observable::Observable;
use crate::observer::Observer;
use crate::signal::{Signal, SignalObserver};
use crate::subscription::{Subscription, SubscriptionLike};

/// Emits a value only once `duration` has passed with nothing newer
/// arriving; the latest pending value is flushed when the source
/// completes.
pub trait Debounce: Observable {
  fn debounce(self, duration: Duration) -> DebounceOp<Self> {
    DebounceOp { source: self, duration }
  }
}

impl<S: Observable> Debounce for S {}

#[derive(Clone)]
pub struct DebounceOp<S> {
  source: S,
  duration: Duration,
}

impl<S: Observable> Observable for DebounceOp<S> {
  type Item = S::Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let (tx, rx) = unbounded();
    self
      .source
      .actual_subscribe(SignalObserver { tx }, subscription.clone());
    let duration = self.duration;
    thread::spawn(move || {
      let mut pending = None;
      loop {
        if subscription.is_closed() {
          return;
        }
        // with a value pending the wait is bounded by the quiet period;
        // otherwise block until the source says something
        let signal = if pending.is_some() {
          match rx.recv_timeout(duration) {
            Ok(signal) => signal,
            Err(RecvTimeoutError::Timeout) => {
              if let Some(value) = pending.take() {
                observer.next(value);
              }
              continue;
            }
            Err(RecvTimeoutError::Disconnected) => return,
          }
        } else {
          match rx.recv() {
            Ok(signal) => signal,
            Err(_) => return,
          }
        };
        match signal {
          Signal::Next(value) => pending = Some(value),
          Signal::Error(err) => {
            observer.error(err);
            return;
          }
          Signal::Complete => {
            if let Some(value) = pending.take() {
              observer.next(value);
            }
            observer.complete();
            return;
          }
        }
      }
    });
  }
}
