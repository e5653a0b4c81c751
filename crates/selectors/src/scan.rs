//! Linear scans shared by the subdomain queries.

use common::RecordId;
use domain::Record;

use crate::clock::{Clock, Window};

/// Returns the records matching `predicate`, in their original order.
pub fn filter_records<R: Clone>(records: &[R], predicate: impl Fn(&R) -> bool) -> Vec<R> {
    records.iter().filter(|r| predicate(r)).cloned().collect()
}

/// Counts the records matching `predicate`.
pub fn count_matching<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

/// Returns the first record with the given id.
pub fn find_by_id<R: Record + Clone>(records: &[R], id: &RecordId) -> Option<R> {
    records.iter().find(|r| r.id() == id).cloned()
}

/// Returns the records whose creation timestamp falls inside `window`,
/// as of `clock`'s current instant.
///
/// Records without a timestamp, or with one that does not parse, are
/// outside every window.
pub fn within_window<R: Record + Clone, C: Clock + ?Sized>(
    records: &[R],
    window: Window,
    clock: &C,
) -> Vec<R> {
    let bound = window.lower_bound_with(clock, clock.now());
    filter_records(records, |record| match record.created_at() {
        Some(raw) => match raw.parse() {
            Some(instant) => bound.is_none_or(|bound| instant >= bound),
            None => {
                tracing::trace!(id = %record.id(), timestamp = %raw, "unparseable timestamp, outside window");
                false
            }
        },
        None => false,
    })
}

/// Returns at most `limit` entries ordered by `metric`, highest first.
///
/// The sort is stable: entries with equal metrics keep their input order.
pub fn top_n_by<T: Clone, K: Ord>(entries: &[T], limit: usize, metric: impl Fn(&T) -> K) -> Vec<T> {
    if limit == 0 {
        return Vec::new();
    }
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| metric(b).cmp(&metric(a)));
    ranked.truncate(limit);
    ranked
}
