use std::mem;
use std::ops::Add;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// Element types whose accumulated sum can be divided by an element
/// count. Integer implementations truncate, so integer averages behave
/// like integer division.
pub trait CountDiv {
  fn count_div(self, count: usize) -> Self;
}

macro_rules! count_div_impl {
  ($($ty:ty),*) => {$(
    impl CountDiv for $ty {
      fn count_div(self, count: usize) -> Self {
        self / count as $ty
      }
    }
  )*};
}

count_div_impl!(i8, i16, i32, i64, i128, isize);
count_div_impl!(u8, u16, u32, u64, u128, usize);
count_div_impl!(f32, f64);

/// Emits the arithmetic mean when the source completes; errors with
/// `EmptySequence` when it produced nothing to average.
pub trait Average: Observable {
  fn average(self) -> AverageOp<Self>
  where
    Self::Item: Add<Output = Self::Item> + Default + CountDiv,
  {
    AverageOp { source: self }
  }
}

impl<S: Observable> Average for S {}

#[derive(Clone)]
pub struct AverageOp<S> {
  source: S,
}

impl<S> Observable for AverageOp<S>
where
  S: Observable,
  S::Item: Add<Output = S::Item> + Default + CountDiv,
{
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    self.source.actual_subscribe(
      AverageObserver { observer, sum: <S::Item>::default(), count: 0 },
      subscription,
    );
  }
}

pub struct AverageObserver<O, Item> {
  observer: O,
  sum: Item,
  count: usize,
}

impl<Item, O> Observer<Item> for AverageObserver<O, Item>
where
  O: Observer<Item>,
  Item: Add<Output = Item> + Default + CountDiv,
{
  fn next(&mut self, value: Item) {
    let sum = mem::take(&mut self.sum);
    self.sum = sum + value;
    self.count += 1;
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    if self.count == 0 {
      self.observer.error(RxError::EmptySequence);
      return;
    }
    let sum = mem::take(&mut self.sum);
    self.observer.next(sum.count_div(self.count));
    self.observer.complete();
  }
}
