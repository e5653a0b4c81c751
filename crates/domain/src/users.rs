//! Users subdomain: accounts, per-role statistics and cleaner performance.

use common::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::de::{default_true, null_as_default, null_as_true};
use crate::read_model::{ReadModel, Record};
use crate::status::RequestStatus;

/// Role of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[serde(alias = "staff")]
    Cleaner,
    Customer,
    #[default]
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Returns the role name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Cleaner => "cleaner",
            UserRole::Customer => "customer",
            UserRole::Unknown => "unknown",
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "cleaner" | "staff" => UserRole::Cleaner,
            "customer" => UserRole::Customer,
            _ => UserRole::Unknown,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user account. Also the shape of the signed-in user in the auth
/// subdomain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: UserRole,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_active: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl User {
    /// Creates an active user with the given role.
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            role,
            is_active: true,
            phone: None,
            created_at: None,
        }
    }

    /// Sets the active flag.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, at: impl Into<Timestamp>) -> Self {
        self.created_at = Some(at.into());
        self
    }
}

impl Record for User {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }
}

/// Number of accounts holding one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: UserRole,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

/// Precomputed account statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub active: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub by_role: Vec<RoleCount>,
}

/// Precomputed performance figures for one cleaner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPerformance {
    #[serde(alias = "_id")]
    pub user_id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_bookings: u64,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

impl StaffPerformance {
    /// Creates a performance entry.
    pub fn new(user_id: impl Into<RecordId>, name: impl Into<String>, completed: u64) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            completed_bookings: completed,
            average_rating: None,
        }
    }
}

/// State of the users subdomain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsersState {
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    pub current_user: Option<User>,
    pub user_stats: Option<UserStats>,
    pub cleaner_performance: Option<Vec<StaffPerformance>>,
    #[serde(flatten)]
    pub status: RequestStatus,
    #[serde(alias = "errorMessage")]
    pub message: Option<String>,
}

impl ReadModel for UsersState {
    fn name(&self) -> &'static str {
        "users"
    }

    fn count(&self) -> usize {
        self.users.len()
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
