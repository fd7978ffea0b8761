use std::collections::VecDeque;
use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::{BoxObserver, Observer};
use crate::rc::MutArc;
use crate::signal::Terminal;
use crate::subscription::{Subscription, SubscriptionLike};

/// A buffered bridge between one upstream run and any number of
/// subscribers.
///
/// The upstream is subscribed lazily, on the first downstream subscribe,
/// and stays subscribed after downstreams leave. Each new subscriber
/// first gets the buffered values — snapshot and registration happen
/// under one lock, so nothing is missed or duplicated — then the live
/// ones. `size == 0` keeps an unbounded count, otherwise only the last
/// `size` values are retained; `window == Duration::ZERO` means no
/// expiry, otherwise values older than `window` are evicted at push and
/// at snapshot time. With both zero the buffer grows without bound.
///
/// The terminal is recorded and replayed, so a subscriber arriving after
/// the upstream finished still observes a proper end of stream.
pub trait Replay: Observable {
  fn replay(self, size: usize, window: Duration) -> ReplayOp<Self>
  where
    Self::Item: Clone,
  {
    ReplayOp {
      source: self,
      size,
      window,
      state: MutArc::own(ReplayState::empty()),
    }
  }
}

impl<S: Observable> Replay for S {}

pub struct ReplayOp<S: Observable> {
  source: S,
  size: usize,
  window: Duration,
  state: MutArc<ReplayState<S::Item>>,
}

impl<S: Observable + Clone> Clone for ReplayOp<S> {
  fn clone(&self) -> Self {
    ReplayOp {
      source: self.source.clone(),
      size: self.size,
      window: self.window,
      state: self.state.clone(),
    }
  }
}

struct ReplayState<Item> {
  started: bool,
  buffer: VecDeque<(Instant, Item)>,
  subscribers: SmallVec<[(Subscription, BoxObserver<Item>); 2]>,
  terminal: Option<Terminal>,
}

impl<Item> ReplayState<Item> {
  fn empty() -> Self {
    ReplayState {
      started: false,
      buffer: VecDeque::new(),
      subscribers: SmallVec::new(),
      terminal: None,
    }
  }
}

impl<S> Observable for ReplayOp<S>
where
  S: Observable,
  S::Item: Clone,
{
  type Item = S::Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    let ReplayOp { source, size, window, state } = self;
    // snapshot, registration, and the started check share one lock
    // acquisition; registering before the upstream ever runs is what
    // guarantees the first subscriber a complete view
    let start = {
      let mut s = state.rc_deref_mut();
      evict_expired(&mut s.buffer, window);
      for (_, value) in s.buffer.iter() {
        observer.next(value.clone());
      }
      let start = !s.started;
      s.started = true;
      if let Some(terminal) = s.terminal.clone() {
        drop(s);
        terminal.deliver(&mut observer);
      } else {
        s.subscribers.push((subscription, Box::new(observer)));
      }
      start
    };
    if start {
      source.actual_subscribe(
        ReplayObserver { state, size, window },
        Subscription::new(),
      );
    }
  }
}

pub struct ReplayObserver<Item> {
  state: MutArc<ReplayState<Item>>,
  size: usize,
  window: Duration,
}

impl<Item> Observer<Item> for ReplayObserver<Item>
where
  Item: Clone + Send + 'static,
{
  fn next(&mut self, value: Item) {
    let mut s = self.state.rc_deref_mut();
    s.buffer.push_back((Instant::now(), value.clone()));
    if self.size > 0 {
      while s.buffer.len() > self.size {
        s.buffer.pop_front();
      }
    }
    evict_expired(&mut s.buffer, self.window);
    s.subscribers.retain(|(sub, _)| !sub.is_closed());
    for (_, observer) in s.subscribers.iter_mut() {
      observer.next(value.clone());
    }
  }

  fn error(&mut self, err: RxError) {
    self.finish(Terminal::Error(err));
  }

  fn complete(&mut self) {
    self.finish(Terminal::Complete);
  }
}

impl<Item> ReplayObserver<Item>
where
  Item: Clone + Send + 'static,
{
  fn finish(&mut self, terminal: Terminal) {
    let mut subscribers = {
      let mut s = self.state.rc_deref_mut();
      s.terminal = Some(terminal.clone());
      std::mem::take(&mut s.subscribers)
    };
    for (sub, observer) in subscribers.iter_mut() {
      if !sub.is_closed() {
        terminal.deliver(observer);
      }
    }
  }
}

fn evict_expired<Item>(
  buffer: &mut VecDeque<(Instant, Item)>,
  window: Duration,
) {
  if window == Duration::ZERO {
    return;
  }
  let now = Instant::now();
  while let Some((stamp, _)) = buffer.front() {
    if now.duration_since(*stamp) >= window {
      buffer.pop_front();
    } else {
      break;
    }
  }
}
