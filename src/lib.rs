//! Push-based reactive streams.
//!
//! An observable is a cold, lazy producer of typed values: nothing runs
//! until it is subscribed, and subscribing twice starts two independent
//! productions. Operators compose by wrapping an upstream observable and
//! interposing an observer that rewrites the upstream signal stream —
//! `next*` followed by at most one of `error` or `complete` — into a
//! downstream one. A [`subscription::Subscription`] controls lifetime:
//! closing it stops the production at its next opportunity, and closure
//! propagates down the subscription tree an operator chain builds.
//!
//! Every source runs its production on its own worker thread, so the
//! blocking terminal operators (`to_array`, `to_one`, `wait`) simply park
//! the caller until a terminal arrives.
//!
//! ```
//! use rill::prelude::*;
//!
//! let doubled = from_array(vec![1, 2, 3]).map(|v| v * 2).to_array();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```
//!
//! Hot sharing is explicit: [`ops::replay::Replay`] buffers one upstream
//! run for any number of subscribers, [`ops::fork::Fork`] fans a single
//! live run out to whoever is subscribed at the time.

pub mod codegen;
pub mod error;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub(crate) mod signal;
pub mod subscription;
