//! Relay plumbing for the worker-thread operators.

use crossbeam_channel::Sender;

use crate::error::RxError;
use crate::observer::Observer;

/// One upstream notification, as a value that can cross a channel.
pub(crate) enum Signal<Item> {
  Next(Item),
  Error(RxError),
  Complete,
}

/// Forwards every notification into a channel; the worker on the other
/// end owns the downstream observer. A failed send means the worker has
/// already finished, so it is ignored.
pub(crate) struct SignalObserver<Item> {
  pub(crate) tx: Sender<Signal<Item>>,
}

impl<Item> Observer<Item> for SignalObserver<Item> {
  fn next(&mut self, value: Item) {
    let _ = self.tx.send(Signal::Next(value));
  }

  fn error(&mut self, err: RxError) {
    let _ = self.tx.send(Signal::Error(err));
  }

  fn complete(&mut self) {
    let _ = self.tx.send(Signal::Complete);
  }
}

/// A recorded terminal, replayed verbatim to late multicast subscribers.
#[derive(Clone)]
pub(crate) enum Terminal {
  Complete,
  Error(RxError),
}

impl Terminal {
  pub(crate) fn deliver<Item, O>(&self, observer: &mut O)
  where
    O: Observer<Item>,
  {
    match self {
      Terminal::Complete => observer.complete(),
      Terminal::Error(err) => observer.error(err.clone()),
    }
  }
}
