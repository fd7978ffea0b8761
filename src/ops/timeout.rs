use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, RecvTimeoutError};

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::signal::{Signal, SignalObserver};
use crate::subscription::{Subscription, SubscriptionLike};

/// Errors with [`RxError::Timeout`] when no signal arrives within
/// `duration` of the previous one (or of subscribe), closing the
/// upstream subscription right after the error goes out.
pub trait Timeout: Observable {
  fn timeout(self, duration: Duration) -> TimeoutOp<Self> {
    TimeoutOp { source: self, duration }
  }
}

impl<S: Observable> Timeout for S {}

#[derive(Clone)]
pub struct TimeoutOp<S> {
  source: S,
  duration: Duration,
}

impl<S: Observable> Observable for TimeoutOp<S> {
  type Item = S::Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let upstream = subscription.child();
    let (tx, rx) = unbounded();
    self.source.actual_subscribe(SignalObserver { tx }, upstream.clone());
    let duration = self.duration;
    thread::spawn(move || loop {
      if subscription.is_closed() {
        return;
      }
      match rx.recv_timeout(duration) {
        Ok(Signal::Next(value)) => observer.next(value),
        Ok(Signal::Error(err)) => {
          observer.error(err);
          return;
        }
        Ok(Signal::Complete) => {
          observer.complete();
          return;
        }
        Err(RecvTimeoutError::Timeout) => {
          observer.error(RxError::Timeout);
          upstream.close();
          return;
        }
        Err(RecvTimeoutError::Disconnected) => return,
      }
    });
  }
}
