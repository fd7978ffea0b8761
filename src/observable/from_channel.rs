use std::thread;

use crossbeam_channel::Receiver;

use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::{Subscription, SubscriptionLike};

/// Emits every value received on a channel; completes when the channel
/// disconnects.
///
/// The receiver is shared between clones, so two concurrent
/// subscriptions compete for values the way two readers of one channel
/// always do.
#[derive(Clone)]
pub struct ChannelObservable<Item> {
  rx: Receiver<Item>,
}

pub fn from_channel<Item>(rx: Receiver<Item>) -> ChannelObservable<Item> {
  ChannelObservable { rx }
}

impl<Item> Observable for ChannelObservable<Item>
where
  Item: Send + 'static,
{
  type Item = Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<Item> + Send + 'static,
  {
    thread::spawn(move || {
      while let Ok(value) = self.rx.recv() {
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
