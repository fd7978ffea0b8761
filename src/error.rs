use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// The error channel of a stream.
///
/// The named kinds are produced by the library itself; everything a user
/// emits through `throw`, `create` or `observer.error` travels as
/// [`RxError::Custom`]. The `Display` strings of the named kinds are
/// stable API.
#[derive(Clone, Debug)]
pub enum RxError {
  /// `timeout` saw no signal within its window.
  Timeout,
  /// `min`, `max`, `average` or `to_one` ran against an empty source.
  EmptySequence,
  /// `to_one` observed a second element.
  TooMany,
  /// A linked subscription was bound twice.
  LinkAlreadyBound,
  /// A user supplied error.
  Custom(Arc<dyn Error + Send + Sync + 'static>),
}

impl RxError {
  /// Wraps an arbitrary error value.
  pub fn custom<E>(err: E) -> Self
  where
    E: Error + Send + Sync + 'static,
  {
    RxError::Custom(Arc::new(err))
  }
}

impl fmt::Display for RxError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RxError::Timeout => f.write_str("timeout"),
      RxError::EmptySequence => f.write_str("empty sequence"),
      RxError::TooMany => f.write_str("too many elements"),
      RxError::LinkAlreadyBound => f.write_str("link already bound"),
      RxError::Custom(err) => fmt::Display::fmt(err, f),
    }
  }
}

impl Error for RxError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      RxError::Custom(err) => {
        let source: &(dyn Error + 'static) = err.as_ref();
        Some(source)
      }
      _ => None,
    }
  }
}

/// Named kinds compare by kind; custom errors compare by identity, so an
/// error stays equal to its own clones as it crosses operator boundaries.
impl PartialEq for RxError {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (RxError::Timeout, RxError::Timeout)
      | (RxError::EmptySequence, RxError::EmptySequence)
      | (RxError::TooMany, RxError::TooMany)
      | (RxError::LinkAlreadyBound, RxError::LinkAlreadyBound) => true,
      (RxError::Custom(a), RxError::Custom(b)) => Arc::ptr_eq(a, b),
      _ => false,
    }
  }
}

#[derive(Debug)]
struct StringError(String);

impl fmt::Display for StringError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl Error for StringError {}

impl From<&str> for RxError {
  fn from(msg: &str) -> Self {
    RxError::Custom(Arc::new(StringError(msg.to_owned())))
  }
}

impl From<String> for RxError {
  fn from(msg: String) -> Self {
    RxError::Custom(Arc::new(StringError(msg)))
  }
}
