use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscription::Subscription;

/// `min` and `max`: fold the extremum, emit it at complete, error with
/// `EmptySequence` when the source produced nothing to compare.
pub trait MinMax: Observable {
  fn min(self) -> MinMaxOp<Self>
  where
    Self::Item: PartialOrd,
  {
    MinMaxOp { source: self, keep_greater: false }
  }

  fn max(self) -> MinMaxOp<Self>
  where
    Self::Item: PartialOrd,
  {
    MinMaxOp { source: self, keep_greater: true }
  }
}

impl<S: Observable> MinMax for S {}

#[derive(Clone)]
pub struct MinMaxOp<S> {
  source: S,
  keep_greater: bool,
}

impl<S> Observable for MinMaxOp<S>
where
  S: Observable,
  S::Item: PartialOrd,
{
  type Item = S::Item;

  fn actual_subscribe<O>(self, observer: O, subscription: Subscription)
  where
    O: Observer<S::Item> + Send + 'static,
  {
    self.source.actual_subscribe(
      MinMaxObserver {
        observer,
        best: None,
        keep_greater: self.keep_greater,
      },
      subscription,
    );
  }
}

pub struct MinMaxObserver<O, Item> {
  observer: O,
  best: Option<Item>,
  keep_greater: bool,
}

impl<Item, O> Observer<Item> for MinMaxObserver<O, Item>
where
  O: Observer<Item>,
  Item: PartialOrd,
{
  fn next(&mut self, value: Item) {
    match &self.best {
      None => self.best = Some(value),
      Some(best) => {
        let replace = if self.keep_greater {
          value > *best
        } else {
          value < *best
        };
        if replace {
          self.best = Some(value);
        }
      }
    }
  }

  fn error(&mut self, err: RxError) {
    self.observer.error(err)
  }

  fn complete(&mut self) {
    match self.best.take() {
      Some(best) => {
        self.observer.next(best);
        self.observer.complete();
      }
      None => self.observer.error(RxError::EmptySequence),
    }
  }
}
