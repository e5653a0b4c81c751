//! Queries over admin notifications.

use common::RecordId;
use domain::{Notification, NotificationKind, Priority, RequestStatus, StateSnapshot};

use crate::clock::{Clock, SystemClock, Window};
use crate::query::Bound;
use crate::scan::{count_matching, filter_records, find_by_id, within_window};

/// Notifications newer than this many days count as recent.
pub const RECENT_NOTIFICATION_DAYS: i64 = 7;

pub fn notifications(snapshot: &StateSnapshot) -> Vec<Notification> {
    snapshot.notification.notifications.clone()
}

pub fn status(snapshot: &StateSnapshot) -> RequestStatus {
    snapshot.notification.status
}

pub fn message(snapshot: &StateSnapshot) -> Option<String> {
    snapshot.notification.message.clone()
}

pub fn unread_notifications(snapshot: &StateSnapshot) -> Vec<Notification> {
    filter_records(&snapshot.notification.notifications, |n| !n.read)
}

/// Number of unread notifications, as shown on the bell badge.
pub fn unread_count(snapshot: &StateSnapshot) -> usize {
    count_matching(&snapshot.notification.notifications, |n| !n.read)
}

pub fn notifications_by_kind(kind: NotificationKind) -> Bound<NotificationKind, Vec<Notification>> {
    Bound::new(kind, |kind, s| {
        filter_records(&s.notification.notifications, |n| n.kind == *kind)
    })
}

pub fn notifications_by_priority(priority: Priority) -> Bound<Priority, Vec<Notification>> {
    Bound::new(priority, |priority, s| {
        filter_records(&s.notification.notifications, |n| n.priority == *priority)
    })
}

pub fn notification_by_id(id: impl Into<RecordId>) -> Bound<RecordId, Option<Notification>> {
    Bound::new(id.into(), |id, s| find_by_id(&s.notification.notifications, id))
}

/// Notifications from the last 7 days, by the host clock.
pub fn recent_notifications() -> Bound<SystemClock, Vec<Notification>> {
    recent_notifications_with(SystemClock)
}

/// Notifications from the last 7 days, by the given clock.
pub fn recent_notifications_with<C: Clock>(clock: C) -> Bound<C, Vec<Notification>> {
    Bound::new(clock, |clock, s| {
        within_window(
            &s.notification.notifications,
            Window::days(RECENT_NOTIFICATION_DAYS),
            clock,
        )
    })
}
