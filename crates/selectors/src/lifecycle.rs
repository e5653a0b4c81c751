//! Lifecycle projections available on every subdomain.

use domain::{RequestStatus, StateSnapshot, Subdomain};

use crate::query::Bound;

/// The request status triplet of a subdomain.
pub fn status(subdomain: Subdomain) -> Bound<Subdomain, RequestStatus> {
    Bound::new(subdomain, |d, s| s.read_model(*d).status())
}

/// Whether a subdomain has a request in flight.
pub fn is_loading(subdomain: Subdomain) -> Bound<Subdomain, bool> {
    Bound::new(subdomain, |d, s| s.read_model(*d).status().is_loading)
}

/// Whether a subdomain's last request succeeded.
pub fn is_success(subdomain: Subdomain) -> Bound<Subdomain, bool> {
    Bound::new(subdomain, |d, s| s.read_model(*d).status().is_success)
}

/// Whether a subdomain's last request failed.
pub fn is_error(subdomain: Subdomain) -> Bound<Subdomain, bool> {
    Bound::new(subdomain, |d, s| s.read_model(*d).status().is_error)
}

/// The status or error message of a subdomain.
pub fn message(subdomain: Subdomain) -> Bound<Subdomain, Option<String>> {
    Bound::new(subdomain, |d, s| s.read_model(*d).message().map(str::to_owned))
}

/// Number of records a subdomain holds.
pub fn record_count(subdomain: Subdomain) -> Bound<Subdomain, usize> {
    Bound::new(subdomain, |d, s| s.read_model(*d).count())
}

/// Lifecycle status of every subdomain, in snapshot order.
pub fn all_statuses(snapshot: &StateSnapshot) -> Vec<(Subdomain, RequestStatus)> {
    Subdomain::ALL
        .into_iter()
        .map(|d| (d, snapshot.read_model(d).status()))
        .collect()
}
