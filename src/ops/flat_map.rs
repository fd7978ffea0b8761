use std::mem;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::rc::MutArc;
use crate::subscription::{Subscription, SubscriptionLike};

/// Maps each source value to an inner observable and merges every inner
/// stream's output. Values of one inner stream stay ordered; across
/// inner streams nothing is promised.
pub trait FlatMap: Observable {
  fn flat_map<B, F>(self, func: F) -> FlatMapOp<Self, F>
  where
    B: Observable,
    F: FnMut(Self::Item) -> B,
  {
    FlatMapOp { source: self, func }
  }
}

impl<S: Observable> FlatMap for S {}

#[derive(Clone)]
pub struct FlatMapOp<S, F> {
  source: S,
  func: F,
}

impl<S, B, F> Observable for FlatMapOp<S, F>
where
  S: Observable,
  B: Observable,
  F: FnMut(S::Item) -> B + Send + 'static,
{
  type Item = B::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<B::Item> + Send + 'static,
  {
    let outer = subscription.child();
    let state = MutArc::own(FlatMapState {
      observer: Some(observer),
      active: 0,
      outer_done: false,
      children: vec![outer.clone()],
    });
    self.source.actual_subscribe(
      OuterObserver { state, func: self.func, parent: subscription },
      outer,
    );
  }
}

struct FlatMapState<O> {
  observer: Option<O>,
  active: usize,
  outer_done: bool,
  children: Vec<Subscription>,
}

pub struct OuterObserver<O, F> {
  state: MutArc<FlatMapState<O>>,
  func: F,
  parent: Subscription,
}

impl<Item, B, O, F> Observer<Item> for OuterObserver<O, F>
where
  B: Observable,
  O: Observer<B::Item> + Send + 'static,
  F: FnMut(Item) -> B,
{
  fn next(&mut self, value: Item) {
    let inner = (self.func)(value);
    let child = self.parent.child();
    {
      let mut state = self.state.rc_deref_mut();
      if state.observer.is_none() {
        return;
      }
      state.active += 1;
      state.children.push(child.clone());
    }
    inner.actual_subscribe(InnerObserver { state: self.state.clone() }, child);
  }

  fn error(&mut self, err: RxError) {
    fail::<B::Item, O>(&self.state, err);
  }

  fn complete(&mut self) {
    let mut state = self.state.rc_deref_mut();
    state.outer_done = true;
    if state.active == 0 {
      if let Some(mut observer) = state.observer.take() {
        drop(state);
        observer.complete();
      }
    }
  }
}

pub struct InnerObserver<O> {
  state: MutArc<FlatMapState<O>>,
}

impl<Item, O> Observer<Item> for InnerObserver<O>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = self.state.rc_deref_mut().observer.as_mut() {
      observer.next(value);
    }
  }

  fn error(&mut self, err: RxError) {
    fail::<Item, O>(&self.state, err);
  }

  fn complete(&mut self) {
    let mut state = self.state.rc_deref_mut();
    state.active -= 1;
    if state.outer_done && state.active == 0 {
      if let Some(mut observer) = state.observer.take() {
        drop(state);
        observer.complete();
      }
    }
  }
}

fn fail<Item, O>(state: &MutArc<FlatMapState<O>>, err: RxError)
where
  O: Observer<Item>,
{
  let (observer, children) = {
    let mut state = state.rc_deref_mut();
    (state.observer.take(), mem::take(&mut state.children))
  };
  if let Some(mut observer) = observer {
    observer.error(err);
    for child in children {
      child.close();
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::prelude::*;

  #[test]
  fn merges_inner_streams() {
    let mut values = range(1, 2).flat_map(|n| range(n, 2)).to_array();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 2, 3]);
  }

  #[test]
  fn inner_error_wins() {
    let (_, err) = from_array(vec![1, 2])
      .flat_map(|n| {
        if n == 2 {
          throw("inner".into()).box_it()
        } else {
          just(n).box_it()
        }
      })
      .to_array_with_error();
    assert_eq!(err.unwrap().to_string(), "inner");
  }
}
