//! Shared mutable state for the operators that multiplex.

use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe shared mutable cell.
///
/// Operators that interleave several producers (`merge`, `flat_map`,
/// `replay`, `fork`) keep their downstream observer and bookkeeping
/// behind one of these; the lock then doubles as the emit mutex that
/// serializes downstream dispatch.
pub struct MutArc<T>(Arc<Mutex<T>>);

impl<T> MutArc<T> {
  pub fn own(value: T) -> Self {
    MutArc(Arc::new(Mutex::new(value)))
  }

  pub fn rc_deref(&self) -> MutexGuard<'_, T> {
    self.0.lock().unwrap()
  }

  pub fn rc_deref_mut(&self) -> MutexGuard<'_, T> {
    self.0.lock().unwrap()
  }
}

impl<T> Clone for MutArc<T> {
  fn clone(&self) -> Self {
    MutArc(self.0.clone())
  }
}

impl<T: Default> Default for MutArc<T> {
  fn default() -> Self {
    MutArc::own(T::default())
  }
}
