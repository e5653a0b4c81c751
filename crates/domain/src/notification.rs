//! Notification subdomain: admin dashboard notifications.

use common::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::priority::Priority;
use crate::read_model::{ReadModel, Record};
use crate::status::RequestStatus;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Booking,
    Payment,
    Message,
    Review,
    #[default]
    System,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    /// Returns the kind name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Booking => "booking",
            NotificationKind::Payment => "payment",
            NotificationKind::Message => "message",
            NotificationKind::Review => "review",
            NotificationKind::System => "system",
            NotificationKind::Other => "other",
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "booking" => NotificationKind::Booking,
            "payment" => NotificationKind::Payment,
            "message" => NotificationKind::Message,
            "review" => NotificationKind::Review,
            "system" => NotificationKind::System,
            _ => NotificationKind::Other,
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A notification shown to administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: NotificationKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Notification {
    /// Creates an unread notification with medium priority.
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: String::new(),
            kind,
            priority: Priority::default(),
            read: false,
            link: None,
            created_at: None,
        }
    }

    /// Marks the notification read or unread.
    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
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
}

impl Record for Notification {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }
}

/// State of the notification subdomain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationState {
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
    #[serde(flatten)]
    pub status: RequestStatus,
    #[serde(alias = "errorMessage")]
    pub message: Option<String>,
}

impl ReadModel for NotificationState {
    fn name(&self) -> &'static str {
        "notification"
    }

    fn count(&self) -> usize {
        self.notifications.len()
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
