use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Runs `other` only after the source completes, so order across the two
/// is preserved. An error in either cuts the whole thing short. Chain
/// for more than two.
pub trait Concat: Observable {
  fn concat<S2>(self, other: S2) -> ConcatOp<Self, S2>
  where
    S2: Observable<Item = Self::Item>,
  {
    ConcatOp { source1: self, source2: other }
  }
}

impl<S: Observable> Concat for S {}

#[derive(Clone)]
pub struct ConcatOp<S1, S2> {
  source1: S1,
  source2: S2,
}

impl<S1, S2> Observable for ConcatOp<S1, S2>
where
  S1: Observable,
  S2: Observable<Item = S1::Item> + Send + 'static,
{
  type Item = S1::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S1::Item> + Send + 'static,
  {
    self.source1.actual_subscribe(
      ConcatObserver {
        observer: Some(observer),
        next_source: Some(self.source2),
        subscription: subscription.clone(),
      },
      subscription,
    );
  }
}

pub struct ConcatObserver<O, S2> {
  observer: Option<O>,
  next_source: Option<S2>,
  subscription: Subscription,
}

impl<Item, O, S2> Observer<Item> for ConcatObserver<O, S2>
where
  Item: Send + 'static,
  O: Observer<Item> + Send + 'static,
  S2: Observable<Item = Item>,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = self.observer.as_mut() {
      observer.next(value);
    }
  }

  fn error(&mut self, err: RxError) {
    if let Some(mut observer) = self.observer.take() {
      observer.error(err);
    }
  }

  fn complete(&mut self) {
    // the downstream observer moves on to the second production
    if let (Some(observer), Some(next)) =
      (self.observer.take(), self.next_source.take())
    {
      next.actual_subscribe(observer, self.subscription.clone());
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::prelude::*;

  #[test]
  fn preserves_cross_stream_order() {
    let joined = from_array(vec![1, 2, 3])
      .concat(from_array(vec![4, 5]))
      .concat(from_array(vec![6, 7]))
      .to_array();
    assert_eq!(joined, vec![1, 2, 3, 4, 5, 6, 7]);
  }

  #[test]
  fn error_cuts_the_chain() {
    let (values, err) = from_array(vec![1, 2])
      .concat(throw("snap".into()))
      .concat(from_array(vec![3]))
      .to_array_with_error();
    assert_eq!(values, vec![1, 2]);
    assert_eq!(err.unwrap().to_string(), "snap");
  }
}
