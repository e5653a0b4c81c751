//! Auth subdomain: the signed-in administrator.

use serde::{Deserialize, Serialize};

use crate::read_model::ReadModel;
use crate::status::RequestStatus;
use crate::users::User;

/// State of the auth subdomain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthState {
    pub user: Option<User>,
    #[serde(flatten)]
    pub status: RequestStatus,
    #[serde(alias = "errorMessage")]
    pub message: Option<String>,
}

impl AuthState {
    /// Creates a state with the given user signed in.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            status: RequestStatus::succeeded(),
            message: None,
        }
    }
}

impl ReadModel for AuthState {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn count(&self) -> usize {
        usize::from(self.user.is_some())
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
