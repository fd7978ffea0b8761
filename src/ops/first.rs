use crate::observable::Observable;
use crate::ops::take::{Take, TakeOp};

/// Emits only the first value. Spelled as `take(1)`.
pub type FirstOp<S> = TakeOp<S>;

pub trait First: Observable {
  fn first(self) -> FirstOp<Self> {
    self.take(1)
  }
}

impl<S: Observable> First for S {}

#[cfg(test)]
mod tests {
  use crate::prelude::*;

  #[test]
  fn emits_only_the_first() {
    assert_eq!(from_array(vec![1, 2, 3, 4]).first().to_array(), vec![1]);
  }

  #[test]
  fn empty_source_completes_empty() {
    assert_eq!(empty::<i32>().first().to_array(), Vec::<i32>::new());
  }
}
