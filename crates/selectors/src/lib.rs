//! Read-model query facade over the admin store snapshot.
//!
//! Every query is a pure function of a [`StateSnapshot`](domain::StateSnapshot):
//! - [`Query`] is implemented by any `Fn(&StateSnapshot) -> T`, so direct
//!   projections are plain functions
//! - [`Bound`] captures an argument (id, status, range, limit, clock) so the
//!   query can be built once and applied to many snapshots
//! - one module per subdomain: auth, contact, notification, payment,
//!   services, users, plus [`lifecycle`] for the status flags of any of them
//!
//! No query mutates the snapshot or fails; absence is an empty `Vec`, `None`,
//! zero or `false`.

pub mod auth;
pub mod clock;
pub mod contact;
pub mod lifecycle;
pub mod notification;
pub mod payment;
pub mod query;
pub mod scan;
pub mod services;
pub mod users;

pub use clock::{Clock, FixedClock, SystemClock, Window};
pub use query::{Bound, Map, Query};
pub use services::DEFAULT_TOP_LIMIT;
