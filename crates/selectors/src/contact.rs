//! Queries over contact-form messages.

use common::RecordId;
use domain::{ContactMessage, ContactStats, ContactStatus, Priority, RequestStatus, StateSnapshot};

use crate::clock::{Clock, SystemClock, Window};
use crate::query::Bound;
use crate::scan::{count_matching, filter_records, find_by_id, within_window};

/// Messages newer than this many days count as recent.
pub const RECENT_MESSAGE_DAYS: i64 = 30;

/// All messages, in store order.
pub fn messages(snapshot: &StateSnapshot) -> Vec<ContactMessage> {
    snapshot.contact.messages.clone()
}

/// The message currently open in the admin view.
pub fn current_message(snapshot: &StateSnapshot) -> Option<ContactMessage> {
    snapshot.contact.current_message.clone()
}

/// Precomputed inbox statistics, when the store has them.
pub fn stats(snapshot: &StateSnapshot) -> Option<ContactStats> {
    snapshot.contact.stats
}

pub fn status(snapshot: &StateSnapshot) -> RequestStatus {
    snapshot.contact.status
}

pub fn message(snapshot: &StateSnapshot) -> Option<String> {
    snapshot.contact.message.clone()
}

/// Messages in the given handling state.
pub fn messages_by_status(status: ContactStatus) -> Bound<ContactStatus, Vec<ContactMessage>> {
    Bound::new(status, |status, s| {
        filter_records(&s.contact.messages, |m| m.status == *status)
    })
}

/// Messages with the given priority.
pub fn messages_by_priority(priority: Priority) -> Bound<Priority, Vec<ContactMessage>> {
    Bound::new(priority, |priority, s| {
        filter_records(&s.contact.messages, |m| m.priority == *priority)
    })
}

/// The first message with the given id.
pub fn message_by_id(id: impl Into<RecordId>) -> Bound<RecordId, Option<ContactMessage>> {
    Bound::new(id.into(), |id, s| find_by_id(&s.contact.messages, id))
}

/// Messages nobody has opened yet.
pub fn unread_messages(snapshot: &StateSnapshot) -> Vec<ContactMessage> {
    filter_records(&snapshot.contact.messages, ContactMessage::is_unread)
}

pub fn unread_count(snapshot: &StateSnapshot) -> usize {
    count_matching(&snapshot.contact.messages, ContactMessage::is_unread)
}

pub fn total_messages(snapshot: &StateSnapshot) -> usize {
    snapshot.contact.messages.len()
}

/// Messages received in the last 30 days, by the host clock.
pub fn recent_messages() -> Bound<SystemClock, Vec<ContactMessage>> {
    recent_messages_with(SystemClock)
}

/// Messages received in the last 30 days, by the given clock.
pub fn recent_messages_with<C: Clock>(clock: C) -> Bound<C, Vec<ContactMessage>> {
    Bound::new(clock, |clock, s| {
        within_window(
            &s.contact.messages,
            Window::days(RECENT_MESSAGE_DAYS),
            clock,
        )
    })
}
