//! Integration tests: a store-shaped JSON snapshot → every subdomain's queries.

use chrono::{DateTime, TimeDelta, Utc};
use common::{Money, RecordId};
use domain::{
    ContactMessage, ContactStatus, Notification, NotificationKind, Payment, PaymentStatus,
    Priority, StateSnapshot, Subdomain, UserRole,
};
use selectors::{
    FixedClock, Query, auth, contact, lifecycle, notification, payment, services, users,
};

const FIXTURE: &str = include_str!("fixtures/state.json");

fn snapshot() -> StateSnapshot {
    StateSnapshot::from_json(FIXTURE).unwrap()
}

/// Noon UTC on the day the fixture was captured.
fn clock() -> FixedClock {
    FixedClock::new(DateTime::parse_from_rfc3339("2024-06-10T12:00:00Z").unwrap())
}

fn ids<T>(records: &[T], id: impl Fn(&T) -> &RecordId) -> Vec<String> {
    records.iter().map(|r| id(r).to_string()).collect()
}

#[test]
fn test_auth_queries() {
    let snapshot = snapshot();

    assert!(auth::is_authenticated(&snapshot));
    assert!(auth::is_admin(&snapshot));
    assert_eq!(auth::user(&snapshot).unwrap().name, "Maria Lopez");
    assert!(auth::status(&snapshot).is_success);
    assert_eq!(auth::message(&snapshot).as_deref(), Some(""));
}

#[test]
fn test_contact_queries() {
    let snapshot = snapshot();

    assert_eq!(contact::total_messages(&snapshot), 4);
    assert_eq!(contact::unread_count(&snapshot), 2);
    assert_eq!(
        contact::stats(&snapshot).unwrap().unread,
        contact::unread_count(&snapshot) as u64
    );

    let urgent = contact::messages_by_priority(Priority::Urgent).apply(&snapshot);
    assert_eq!(ids(&urgent, |m| &m.id), ["c-103"]);

    let archived = contact::messages_by_status(ContactStatus::Archived).apply(&snapshot);
    assert_eq!(archived[0].subject, "Thank you");

    // c-102 is 39 days old, c-103 has a garbage timestamp, c-104 has none.
    let recent = contact::recent_messages_with(clock()).apply(&snapshot);
    assert_eq!(ids(&recent, |m| &m.id), ["c-101"]);

    assert!(contact::current_message(&snapshot).is_none());
    assert!(contact::message_by_id("c-999").apply(&snapshot).is_none());
}

#[test]
fn test_notification_queries() {
    let snapshot = snapshot();

    assert_eq!(notification::unread_count(&snapshot), 2);
    let bookings = notification::notifications_by_kind(NotificationKind::Booking).apply(&snapshot);
    assert_eq!(ids(&bookings, |n| &n.id), ["n-1", "n-3"]);

    let recent = notification::recent_notifications_with(clock()).apply(&snapshot);
    assert_eq!(ids(&recent, |n| &n.id), ["n-1", "n-3"]);

    assert_eq!(
        notification::notification_by_id("n-2")
            .apply(&snapshot)
            .map(|n| n.read),
        Some(true)
    );
    assert!(notification::status(&snapshot).is_loading);
}

#[test]
fn test_payment_queries() {
    let snapshot = snapshot();

    assert_eq!(payment::total_revenue(&snapshot), Money::from_dollars(360));
    assert_eq!(payment::reported_revenue(&snapshot), Money::from_dollars(360));
    assert!(payment::payment_stats(&snapshot).is_none());
    assert_eq!(payment::pending_count(&snapshot), 1);
    assert_eq!(
        payment::payment_by_id("p-2").apply(&snapshot).unwrap().amount,
        Money::from_cents(8950)
    );

    let booking = payment::payments_for_booking("b-1").apply(&snapshot);
    assert_eq!(ids(&booking, |p| &p.id), ["p-1", "p-4"]);

    let refunded = payment::payments_by_status(PaymentStatus::Refunded).apply(&snapshot);
    assert_eq!(refunded.len(), 1);

    let today = payment::todays_payments_with(clock()).apply(&snapshot);
    assert_eq!(ids(&today, |p| &p.id), ["p-1", "p-2"]);
    assert_eq!(
        payment::todays_revenue_with(clock()).apply(&snapshot),
        Money::from_dollars(120)
    );
}

#[test]
fn test_service_queries() {
    let snapshot = snapshot();

    let mid = services::services_by_price_range(Money::from_dollars(50), Money::from_dollars(150))
        .apply(&snapshot);
    assert_eq!(ids(&mid, |s| &s.id), ["s-1", "s-2", "s-3"]);

    assert_eq!(services::active_count(&snapshot), 3);
    assert_eq!(services::available_services(&snapshot).len(), 3);
    assert_eq!(
        services::categories(&snapshot),
        ["residential", "commercial", "specialty"]
    );
    assert_eq!(services::current_service(&snapshot).unwrap().name, "Deep clean");

    // Standard clean and Office tidy tie on 18 bookings; store order wins.
    let top = services::top_performing_services(Some(3)).apply(&snapshot);
    assert_eq!(ids(&top, |p| &p.service_id), ["s-2", "s-1", "s-3"]);
    assert_eq!(services::top_performing_services(None).apply(&snapshot).len(), 4);
}

#[test]
fn test_user_queries() {
    let snapshot = snapshot();

    assert_eq!(users::total_users(&snapshot), 5);
    assert_eq!(users::count_by_role(UserRole::Cleaner).apply(&snapshot), 2);
    assert_eq!(users::active_users(&snapshot).len(), 4);

    let breakdown = users::role_breakdown(&snapshot);
    let counts: Vec<_> = breakdown.iter().map(|r| (r.role, r.count)).collect();
    assert_eq!(
        counts,
        [(UserRole::Admin, 1), (UserRole::Cleaner, 2), (UserRole::Customer, 2)]
    );

    let top = users::top_cleaners(None).apply(&snapshot);
    assert_eq!(ids(&top, |p| &p.user_id), ["u-10", "u-11"]);
}

#[test]
fn test_lifecycle_across_subdomains() {
    let snapshot = snapshot();

    assert!(lifecycle::is_error(Subdomain::Payment).apply(&snapshot));
    assert_eq!(
        lifecycle::message(Subdomain::Payment).apply(&snapshot).as_deref(),
        Some("Failed to fetch payment stats")
    );
    assert!(lifecycle::is_loading(Subdomain::Notification).apply(&snapshot));
    assert!(lifecycle::status(Subdomain::Users).apply(&snapshot).is_idle());
    assert_eq!(lifecycle::record_count(Subdomain::Services).apply(&snapshot), 4);
}

#[test]
fn test_bound_queries_are_reusable_across_snapshots() {
    let completed = payment::payments_by_status(PaymentStatus::Completed);
    let count_completed = payment::payments_by_status(PaymentStatus::Completed).map(|v| v.len());

    let full = snapshot();
    let empty = StateSnapshot::new();

    assert_eq!(completed.apply(&full).len(), 2);
    assert!(completed.apply(&empty).is_empty());
    assert_eq!(count_completed.apply(&full), 2);
    assert_eq!(count_completed.apply(&empty), 0);
}

#[test]
fn test_queries_never_mutate_the_snapshot() {
    let snapshot = snapshot();
    let before = snapshot.clone();

    let _ = contact::recent_messages_with(clock()).apply(&snapshot);
    let _ = payment::total_revenue(&snapshot);
    let _ = services::top_performing_services(Some(2)).apply(&snapshot);
    let _ = users::role_breakdown(&snapshot);

    assert_eq!(snapshot, before);
}

#[test]
fn test_wall_clock_queries_include_fresh_records() {
    let now = Utc::now();
    let long_ago = now - TimeDelta::days(400);

    let mut snapshot = StateSnapshot::new();
    snapshot.contact.messages = vec![
        ContactMessage::new("fresh", "Quote", ContactStatus::New).created(now),
        ContactMessage::new("old", "Quote", ContactStatus::New).created(long_ago),
    ];
    snapshot.notification.notifications = vec![
        Notification::new("fresh", "New booking", NotificationKind::Booking).created(now),
        Notification::new("old", "New booking", NotificationKind::Booking).created(long_ago),
    ];
    snapshot.payment.payments = vec![
        Payment::new("fresh", Money::from_dollars(40), PaymentStatus::Completed).created(now),
        Payment::new("old", Money::from_dollars(40), PaymentStatus::Completed)
            .created(now - TimeDelta::days(2)),
    ];

    let recent = contact::recent_messages().apply(&snapshot);
    assert_eq!(ids(&recent, |m| &m.id), ["fresh"]);

    let recent = notification::recent_notifications().apply(&snapshot);
    assert_eq!(ids(&recent, |n| &n.id), ["fresh"]);

    let today = payment::todays_payments().apply(&snapshot);
    assert_eq!(ids(&today, |p| &p.id), ["fresh"]);
}

#[test]
fn test_numeric_timestamps_fall_outside_windows() {
    let snapshot = StateSnapshot::from_json(
        r#"{"contact":{"messages":[
            {"_id":"millis","createdAt":1717999200000},
            {"_id":"iso","createdAt":"2024-06-10T06:00:00Z"}
        ]}}"#,
    )
    .unwrap();

    assert_eq!(contact::total_messages(&snapshot), 2);
    let recent = contact::recent_messages_with(clock()).apply(&snapshot);
    assert_eq!(ids(&recent, |m| &m.id), ["iso"]);
}

#[test]
fn test_revenue_saturates_instead_of_overflowing() {
    let snapshot = StateSnapshot::from_json(
        r#"{"payment":{"payments":[
            {"_id":"p1","amount":1e17,"status":"completed"},
            {"_id":"p2","amount":1e17,"status":"completed"},
            {"_id":"p3","amount":1,"status":"completed"}
        ]}}"#,
    )
    .unwrap();

    assert_eq!(payment::total_revenue(&snapshot).cents(), i64::MAX);
}
