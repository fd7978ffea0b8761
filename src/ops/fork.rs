use smallvec::SmallVec;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::{BoxObserver, Observer};
use crate::rc::MutArc;
use crate::signal::Terminal;
use crate::subscription::{Subscription, SubscriptionLike};

/// A hot, shared view of one live upstream run.
///
/// `fork()` subscribes the upstream exactly once, on the spot; every
/// value is fanned out to whoever is subscribed at that moment, so late
/// subscribers miss what came before. The terminal is recorded, which is
/// what lets a late `wait()` on the fork return once the upstream has
/// finished.
pub trait Fork: Observable {
  fn fork(self) -> ForkOp<Self::Item>
  where
    Self::Item: Clone,
  {
    let state = MutArc::own(ForkState::empty());
    self
      .actual_subscribe(ForkObserver { state: state.clone() }, Subscription::new());
    ForkOp { state }
  }
}

impl<S: Observable> Fork for S {}

pub struct ForkOp<Item> {
  state: MutArc<ForkState<Item>>,
}

impl<Item> Clone for ForkOp<Item> {
  fn clone(&self) -> Self {
    ForkOp { state: self.state.clone() }
  }
}

struct ForkState<Item> {
  subscribers: SmallVec<[(Subscription, BoxObserver<Item>); 2]>,
  terminal: Option<Terminal>,
}

impl<Item> ForkState<Item> {
  fn empty() -> Self {
    ForkState { subscribers: SmallVec::new(), terminal: None }
  }
}

impl<Item> Observable for ForkOp<Item>
where
  Item: Clone + Send + 'static,
{
  type Item = Item;

  fn actual_subscribe<O>(self, mut observer: O, subscription: Subscription)
  where
    O: Observer<Item> + Send + 'static,
  {
    let mut state = self.state.rc_deref_mut();
    if let Some(terminal) = state.terminal.clone() {
      drop(state);
      terminal.deliver(&mut observer);
    } else {
      state.subscribers.push((subscription, Box::new(observer)));
    }
  }
}

pub struct ForkObserver<Item> {
  state: MutArc<ForkState<Item>>,
}

impl<Item> Observer<Item> for ForkObserver<Item>
where
  Item: Clone + Send + 'static,
{
  fn next(&mut self, value: Item) {
    let mut state = self.state.rc_deref_mut();
    state.subscribers.retain(|(sub, _)| !sub.is_closed());
    // the last subscriber takes the value itself, earlier ones a clone
    let mut subscribers = state.subscribers.iter_mut().peekable();
    while let Some((_, observer)) = subscribers.next() {
      if subscribers.peek().is_some() {
        observer.next(value.clone());
      } else {
        observer.next(value);
        break;
      }
    }
  }

  fn error(&mut self, err: RxError) {
    self.finish(Terminal::Error(err));
  }

  fn complete(&mut self) {
    self.finish(Terminal::Complete);
  }
}

impl<Item> ForkObserver<Item>
where
  Item: Clone + Send + 'static,
{
  fn finish(&mut self, terminal: Terminal) {
    let mut subscribers = {
      let mut state = self.state.rc_deref_mut();
      state.terminal = Some(terminal.clone());
      std::mem::take(&mut state.subscribers)
    };
    for (sub, observer) in subscribers.iter_mut() {
      if !sub.is_closed() {
        terminal.deliver(observer);
      }
    }
  }
}
