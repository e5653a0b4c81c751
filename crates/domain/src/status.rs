//! Request lifecycle flags and subdomain names.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::error::DomainError;

/// The loading/success/error triplet every subdomain carries.
///
/// The flags are informational. Nothing here guarantees that at most one is
/// set; that is up to whoever populates the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub is_loading: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_error: bool,
}

impl RequestStatus {
    /// Status of a request in flight.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// Status of a request that succeeded.
    pub fn succeeded() -> Self {
        Self {
            is_success: true,
            ..Self::default()
        }
    }

    /// Status of a request that failed.
    pub fn failed() -> Self {
        Self {
            is_error: true,
            ..Self::default()
        }
    }

    /// Returns true if no flag is set.
    pub fn is_idle(&self) -> bool {
        !(self.is_loading || self.is_success || self.is_error)
    }
}

/// The named subdomains of the state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subdomain {
    Auth,
    Contact,
    Notification,
    Payment,
    Services,
    Users,
}

impl Subdomain {
    /// Every subdomain, in snapshot order.
    pub const ALL: [Subdomain; 6] = [
        Subdomain::Auth,
        Subdomain::Contact,
        Subdomain::Notification,
        Subdomain::Payment,
        Subdomain::Services,
        Subdomain::Users,
    ];

    /// Returns the key the subdomain has in the snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subdomain::Auth => "auth",
            Subdomain::Contact => "contact",
            Subdomain::Notification => "notification",
            Subdomain::Payment => "payment",
            Subdomain::Services => "services",
            Subdomain::Users => "users",
        }
    }
}

impl std::fmt::Display for Subdomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Subdomain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Subdomain::ALL
            .into_iter()
            .find(|d| d.as_str() == needle)
            .ok_or_else(|| DomainError::UnknownSubdomain(s.to_string()))
    }
}
