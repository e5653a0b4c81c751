//! Queries over the service catalogue.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use common::{Money, RecordId};
use domain::{RequestStatus, Service, ServicePerformance, ServiceStats, StateSnapshot};

use crate::query::Bound;
use crate::scan::{count_matching, filter_records, find_by_id, top_n_by};

/// Number of entries a top-N ranking returns when no limit is given.
pub const DEFAULT_TOP_LIMIT: usize = 5;

pub fn services(snapshot: &StateSnapshot) -> Vec<Service> {
    snapshot.services.services.clone()
}

pub fn current_service(snapshot: &StateSnapshot) -> Option<Service> {
    snapshot.services.current_service.clone()
}

pub fn service_stats(snapshot: &StateSnapshot) -> Option<ServiceStats> {
    snapshot.services.service_stats.clone()
}

pub fn status(snapshot: &StateSnapshot) -> RequestStatus {
    snapshot.services.status
}

pub fn message(snapshot: &StateSnapshot) -> Option<String> {
    snapshot.services.message.clone()
}

pub fn active_services(snapshot: &StateSnapshot) -> Vec<Service> {
    filter_records(&snapshot.services.services, |s| s.is_active)
}

/// Services customers can currently book.
pub fn available_services(snapshot: &StateSnapshot) -> Vec<Service> {
    filter_records(&snapshot.services.services, |s| s.is_available)
}

pub fn active_count(snapshot: &StateSnapshot) -> usize {
    count_matching(&snapshot.services.services, |s| s.is_active)
}

/// Services in one category. Categories compare exactly.
pub fn services_by_category(category: impl Into<String>) -> Bound<String, Vec<Service>> {
    Bound::new(category.into(), |category, s| {
        filter_records(&s.services.services, |svc| svc.category == *category)
    })
}

/// Services priced within `[min, max]`, both ends included.
pub fn services_by_price_range(min: Money, max: Money) -> Bound<RangeInclusive<Money>, Vec<Service>> {
    Bound::new(min..=max, |range, s| {
        filter_records(&s.services.services, |svc| range.contains(&svc.price))
    })
}

/// Services lasting between `min` and `max` minutes, both ends included.
pub fn services_by_duration_range(min: u32, max: u32) -> Bound<RangeInclusive<u32>, Vec<Service>> {
    Bound::new(min..=max, |range, s| {
        filter_records(&s.services.services, |svc| range.contains(&svc.duration))
    })
}

pub fn service_by_id(id: impl Into<RecordId>) -> Bound<RecordId, Option<Service>> {
    Bound::new(id.into(), |id, s| find_by_id(&s.services.services, id))
}

/// Distinct categories in the order they first appear.
pub fn categories(snapshot: &StateSnapshot) -> Vec<String> {
    let mut seen = HashSet::new();
    snapshot
        .services
        .services
        .iter()
        .filter(|svc| seen.insert(svc.category.as_str()))
        .map(|svc| svc.category.clone())
        .collect()
}

/// Best-performing services by completed bookings, from the stats slot.
///
/// `None` means [`DEFAULT_TOP_LIMIT`]. Without a stats slot the ranking is
/// empty.
pub fn top_performing_services(limit: Option<usize>) -> Bound<usize, Vec<ServicePerformance>> {
    Bound::new(limit.unwrap_or(DEFAULT_TOP_LIMIT), |limit, s| {
        s.services
            .service_stats
            .as_ref()
            .map(|stats| top_n_by(&stats.top_services, *limit, |p| p.completed_bookings))
            .unwrap_or_default()
    })
}
