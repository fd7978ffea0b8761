use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::rc::MutArc;
use crate::subscription::Subscription;

/// Like `merge`, but an error does not cut the other source short: it is
/// held back and delivered only after both sources have finished. With
/// two failures the first one wins — only one terminal may flow.
pub trait MergeDelayError: Observable {
  fn merge_delay_error<S2>(self, other: S2) -> MergeDelayErrorOp<Self, S2>
  where
    S2: Observable<Item = Self::Item>,
  {
    MergeDelayErrorOp { source1: self, source2: other }
  }
}

impl<S: Observable> MergeDelayError for S {}

#[derive(Clone)]
pub struct MergeDelayErrorOp<S1, S2> {
  source1: S1,
  source2: S2,
}

impl<S1, S2> Observable for MergeDelayErrorOp<S1, S2>
where
  S1: Observable,
  S2: Observable<Item = S1::Item>,
{
  type Item = S1::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S1::Item> + Send + 'static,
  {
    let state = MutArc::own(DelayState {
      observer: Some(observer),
      active: 2,
      deferred: None,
    });
    self.source1.actual_subscribe(
      DelayErrorObserver { state: state.clone() },
      subscription.child(),
    );
    self
      .source2
      .actual_subscribe(DelayErrorObserver { state }, subscription.child());
  }
}

struct DelayState<O> {
  observer: Option<O>,
  active: usize,
  deferred: Option<RxError>,
}

pub struct DelayErrorObserver<O> {
  state: MutArc<DelayState<O>>,
}

impl<Item, O> Observer<Item> for DelayErrorObserver<O>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = self.state.rc_deref_mut().observer.as_mut() {
      observer.next(value);
    }
  }

  fn error(&mut self, err: RxError) {
    let mut state = self.state.rc_deref_mut();
    if state.deferred.is_none() {
      state.deferred = Some(err);
    }
    state.active -= 1;
    finish_if_done::<Item, O>(state);
  }

  fn complete(&mut self) {
    let mut state = self.state.rc_deref_mut();
    state.active -= 1;
    finish_if_done::<Item, O>(state);
  }
}

fn finish_if_done<Item, O>(
  mut state: std::sync::MutexGuard<'_, DelayState<O>>,
) where
  O: Observer<Item>,
{
  if state.active > 0 {
    return;
  }
  if let Some(mut observer) = state.observer.take() {
    let deferred = state.deferred.take();
    drop(state);
    match deferred {
      Some(err) => observer.error(err),
      None => observer.complete(),
    }
  }
}
