use crate::observable::Observable;
use crate::ops::reduce::{Reduce, ReduceOp};

/// Realised as a `reduce` that ignores the values.
pub type CountOp<S, Item> = ReduceOp<S, usize, fn(usize, Item) -> usize>;

/// Emits how many values the source produced.
pub trait Count: Observable {
  fn count(self) -> CountOp<Self, Self::Item> {
    fn bump<T>(acc: usize, _value: T) -> usize {
      acc + 1
    }
    self.reduce(0, bump::<Self::Item> as fn(usize, Self::Item) -> usize)
  }
}

impl<S: Observable> Count for S {}
