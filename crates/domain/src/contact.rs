//! Contact subdomain: messages sent through the public contact form.

use common::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::priority::Priority;
use crate::read_model::{ReadModel, Record};
use crate::status::RequestStatus;

/// Handling state of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    #[serde(alias = "unread")]
    New,
    Read,
    Replied,
    Archived,
    #[serde(other)]
    Unknown,
}

impl ContactStatus {
    /// Returns the status name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
            ContactStatus::Archived => "archived",
            ContactStatus::Unknown => "unknown",
        }
    }
}

impl From<&str> for ContactStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" | "unread" => ContactStatus::New,
            "read" => ContactStatus::Read,
            "replied" => ContactStatus::Replied,
            "archived" => ContactStatus::Archived,
            _ => ContactStatus::Unknown,
        }
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ContactStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl ContactMessage {
    /// Creates a message with medium priority.
    pub fn new(id: impl Into<RecordId>, subject: impl Into<String>, status: ContactStatus) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            phone: None,
            subject: subject.into(),
            message: String::new(),
            status,
            priority: Priority::default(),
            created_at: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, at: impl Into<Timestamp>) -> Self {
        self.created_at = Some(at.into());
        self
    }

    /// Returns true if nobody has opened the message yet.
    pub fn is_unread(&self) -> bool {
        self.status == ContactStatus::New
    }
}

impl Record for ContactMessage {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }
}

/// Precomputed contact inbox statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unread: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub replied: u64,
}

/// State of the contact subdomain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactState {
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<ContactMessage>,
    pub current_message: Option<ContactMessage>,
    pub stats: Option<ContactStats>,
    #[serde(flatten)]
    pub status: RequestStatus,
    #[serde(alias = "errorMessage")]
    pub message: Option<String>,
}

impl ReadModel for ContactState {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn count(&self) -> usize {
        self.messages.len()
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_defaults_to_new_and_medium() {
        let msg: ContactMessage =
            serde_json::from_str(r#"{"_id":"c1","subject":"Quote request"}"#).unwrap();
        assert_eq!(msg.status, ContactStatus::New);
        assert_eq!(msg.priority, Priority::Medium);
        assert!(msg.is_unread());
    }

    #[test]
    fn unread_alias_maps_to_new() {
        let msg: ContactMessage =
            serde_json::from_str(r#"{"id":"c2","status":"unread"}"#).unwrap();
        assert_eq!(msg.status, ContactStatus::New);
        assert_eq!(ContactStatus::from("UNREAD"), ContactStatus::New);
    }

    #[test]
    fn state_counts_messages() {
        let state = ContactState {
            messages: vec![
                ContactMessage::new("c1", "a", ContactStatus::New),
                ContactMessage::new("c2", "b", ContactStatus::Replied),
            ],
            ..Default::default()
        };
        assert_eq!(state.count(), 2);
        assert_eq!(state.name(), "contact");
    }
}
