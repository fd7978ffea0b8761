use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::rc::MutArc;
use crate::subscription::{Subscription, SubscriptionLike};

/// Interleaves two sources running concurrently. Downstream completes
/// when **both** complete; the **first** error terminates the merge and
/// closes the other side. Merge more by chaining.
pub trait Merge: Observable {
  fn merge<S2>(self, other: S2) -> MergeOp<Self, S2>
  where
    S2: Observable<Item = Self::Item>,
  {
    MergeOp { source1: self, source2: other }
  }
}

impl<S: Observable> Merge for S {}

#[derive(Clone)]
pub struct MergeOp<S1, S2> {
  source1: S1,
  source2: S2,
}

impl<S1, S2> Observable for MergeOp<S1, S2>
where
  S1: Observable,
  S2: Observable<Item = S1::Item>,
{
  type Item = S1::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S1::Item> + Send + 'static,
  {
    // The shared state's lock is the emit mutex: both sides dispatch
    // downstream under it, which keeps the observer serial.
    let state = MutArc::own(MergeState { observer: Some(observer), active: 2 });
    let sub1 = subscription.child();
    let sub2 = subscription.child();
    self.source1.actual_subscribe(
      MergeObserver { state: state.clone(), sibling: sub2.clone() },
      sub1.clone(),
    );
    self
      .source2
      .actual_subscribe(MergeObserver { state, sibling: sub1 }, sub2);
  }
}

pub(crate) struct MergeState<O> {
  pub(crate) observer: Option<O>,
  pub(crate) active: usize,
}

pub struct MergeObserver<O> {
  state: MutArc<MergeState<O>>,
  sibling: Subscription,
}

impl<Item, O> Observer<Item> for MergeObserver<O>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = self.state.rc_deref_mut().observer.as_mut() {
      observer.next(value);
    }
  }

  fn error(&mut self, err: RxError) {
    let taken = self.state.rc_deref_mut().observer.take();
    if let Some(mut observer) = taken {
      observer.error(err);
      self.sibling.close();
    }
  }

  fn complete(&mut self) {
    let mut state = self.state.rc_deref_mut();
    state.active -= 1;
    if state.active == 0 {
      if let Some(mut observer) = state.observer.take() {
        drop(state);
        observer.complete();
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::prelude::*;
  use std::thread;
  use std::time::Duration;

  fn staggered(values: Vec<i64>, delay_ms: u64) -> impl Observable<Item = i64> + Clone {
    create(move |mut observer: BoxObserver<i64>, _sub: Subscription| {
      for value in values.clone() {
        thread::sleep(Duration::from_millis(delay_ms));
        observer.next(value);
      }
      observer.complete();
    })
  }

  #[test]
  fn interleaves_by_time() {
    let slow = staggered(vec![1, 3], 30);
    let fast = create(move |mut observer: BoxObserver<i64>, _sub: Subscription| {
      thread::sleep(Duration::from_millis(15));
      observer.next(0);
      thread::sleep(Duration::from_millis(30));
      observer.next(2);
      observer.complete();
    });
    assert_eq!(slow.merge(fast).to_array(), vec![0, 1, 2, 3]);
  }

  #[test]
  fn completes_when_both_complete() {
    let merged = from_array(vec![1, 2]).merge(from_array(vec![3, 4]));
    let mut values = merged.to_array();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3, 4]);
  }

  #[test]
  fn first_error_terminates() {
    let failing = throw::<i64>("split".into());
    let endless = staggered(vec![1], 5);
    let (_, err) = endless.merge(failing).to_array_with_error();
    assert_eq!(err.unwrap().to_string(), "split");
  }
}
