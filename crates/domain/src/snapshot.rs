//! The full application state snapshot.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::auth::AuthState;
use crate::contact::ContactState;
use crate::de::null_as_default;
use crate::notification::NotificationState;
use crate::payment::PaymentState;
use crate::read_model::ReadModel;
use crate::services::ServicesState;
use crate::status::Subdomain;
use crate::users::UsersState;

/// An immutable view of the whole store at one instant.
///
/// A subdomain that is missing from the source (or `null`) decodes as that
/// subdomain's empty default, so every query sees a complete snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub auth: AuthState,
    #[serde(deserialize_with = "null_as_default")]
    pub contact: ContactState,
    #[serde(deserialize_with = "null_as_default")]
    pub notification: NotificationState,
    #[serde(deserialize_with = "null_as_default")]
    pub payment: PaymentState,
    #[serde(deserialize_with = "null_as_default")]
    pub services: ServicesState,
    #[serde(deserialize_with = "null_as_default")]
    pub users: UsersState,
}

impl StateSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: StateSnapshot = serde_json::from_str(json)?;
        snapshot.log_loaded();
        Ok(snapshot)
    }

    /// Decodes a snapshot from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let snapshot: StateSnapshot = serde_json::from_reader(reader)?;
        snapshot.log_loaded();
        Ok(snapshot)
    }

    /// Reads and decodes a snapshot file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading state snapshot");
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Returns the read model of one subdomain.
    pub fn read_model(&self, subdomain: Subdomain) -> &dyn ReadModel {
        match subdomain {
            Subdomain::Auth => &self.auth,
            Subdomain::Contact => &self.contact,
            Subdomain::Notification => &self.notification,
            Subdomain::Payment => &self.payment,
            Subdomain::Services => &self.services,
            Subdomain::Users => &self.users,
        }
    }

    fn log_loaded(&self) {
        tracing::debug!(
            messages = self.contact.messages.len(),
            notifications = self.notification.notifications.len(),
            payments = self.payment.payments.len(),
            services = self.services.services.len(),
            users = self.users.users.len(),
            "decoded state snapshot"
        );
    }
}
