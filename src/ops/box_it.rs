use crate::observable::{Observable, Stream};

/// Erases an operator chain into a [`Stream`] handle that can be named,
/// stored, and re-subscribed.
pub trait BoxIt: Observable {
  fn box_it(self) -> Stream<Self::Item>
  where
    Self: Clone + Send + 'static,
  {
    Stream::new(self)
  }
}

impl<S: Observable> BoxIt for S {}
