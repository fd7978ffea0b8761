use std::ops::Add;

use crate::observable::Observable;
use crate::ops::reduce::{Reduce, ReduceOp};

/// Realised as a `reduce` with an addition fold.
pub type SumOp<S, Item> = ReduceOp<S, Item, fn(Item, Item) -> Item>;

/// Adds up the source; an empty source sums to the additive identity.
pub trait Sum: Observable {
  fn sum(self) -> SumOp<Self, Self::Item>
  where
    Self::Item: Add<Output = Self::Item> + Default,
  {
    fn add<T: Add<Output = T>>(acc: T, value: T) -> T {
      acc + value
    }
    self.reduce(
      <Self::Item>::default(),
      add::<Self::Item> as fn(Self::Item, Self::Item) -> Self::Item,
    )
  }
}

impl<S: Observable> Sum for S {}
