//! Queries over booking payments and revenue.

use common::{Money, RecordId};
use domain::{Payment, PaymentStats, PaymentStatus, RequestStatus, StateSnapshot};

use crate::clock::{Clock, SystemClock, Window};
use crate::query::Bound;
use crate::scan::{count_matching, filter_records, find_by_id, within_window};

pub fn payments(snapshot: &StateSnapshot) -> Vec<Payment> {
    snapshot.payment.payments.clone()
}

pub fn current_payment(snapshot: &StateSnapshot) -> Option<Payment> {
    snapshot.payment.current_payment.clone()
}

/// Precomputed payment totals, when the store has them.
pub fn payment_stats(snapshot: &StateSnapshot) -> Option<PaymentStats> {
    snapshot.payment.payment_stats
}

pub fn status(snapshot: &StateSnapshot) -> RequestStatus {
    snapshot.payment.status
}

pub fn message(snapshot: &StateSnapshot) -> Option<String> {
    snapshot.payment.message.clone()
}

pub fn payments_by_status(status: PaymentStatus) -> Bound<PaymentStatus, Vec<Payment>> {
    Bound::new(status, |status, s| {
        filter_records(&s.payment.payments, |p| p.status == *status)
    })
}

pub fn completed_payments(snapshot: &StateSnapshot) -> Vec<Payment> {
    filter_records(&snapshot.payment.payments, |p| {
        p.status == PaymentStatus::Completed
    })
}

pub fn pending_payments(snapshot: &StateSnapshot) -> Vec<Payment> {
    filter_records(&snapshot.payment.payments, |p| {
        p.status == PaymentStatus::Pending
    })
}

pub fn pending_count(snapshot: &StateSnapshot) -> usize {
    count_matching(&snapshot.payment.payments, |p| {
        p.status == PaymentStatus::Pending
    })
}

pub fn payment_by_id(id: impl Into<RecordId>) -> Bound<RecordId, Option<Payment>> {
    Bound::new(id.into(), |id, s| find_by_id(&s.payment.payments, id))
}

/// Payments linked to one booking.
pub fn payments_for_booking(booking_id: impl Into<RecordId>) -> Bound<RecordId, Vec<Payment>> {
    Bound::new(booking_id.into(), |booking, s| {
        filter_records(&s.payment.payments, |p| p.booking_id.as_ref() == Some(booking))
    })
}

/// Sum of completed payment amounts, computed from the records.
pub fn total_revenue(snapshot: &StateSnapshot) -> Money {
    revenue_of(&snapshot.payment.payments)
}

/// Revenue as reported by the stats slot, falling back to
/// [`total_revenue`] when the slot is absent.
pub fn reported_revenue(snapshot: &StateSnapshot) -> Money {
    snapshot
        .payment
        .payment_stats
        .map(|stats| stats.total_revenue)
        .unwrap_or_else(|| total_revenue(snapshot))
}

/// Payments created since local midnight, by the host clock.
pub fn todays_payments() -> Bound<SystemClock, Vec<Payment>> {
    todays_payments_with(SystemClock)
}

/// Payments created since local midnight, by the given clock.
pub fn todays_payments_with<C: Clock>(clock: C) -> Bound<C, Vec<Payment>> {
    Bound::new(clock, |clock, s| {
        within_window(&s.payment.payments, Window::Today, clock)
    })
}

/// Completed revenue from payments created since local midnight.
pub fn todays_revenue_with<C: Clock>(clock: C) -> Bound<C, Money> {
    Bound::new(clock, |clock, s| {
        revenue_of(&within_window(&s.payment.payments, Window::Today, clock))
    })
}

fn revenue_of(payments: &[Payment]) -> Money {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .map(|p| p.amount)
        .sum()
}
