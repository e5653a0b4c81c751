//! Queries over the signed-in user.

use domain::{RequestStatus, StateSnapshot, User, UserRole};

/// The signed-in user, if any.
pub fn user(snapshot: &StateSnapshot) -> Option<User> {
    snapshot.auth.user.clone()
}

/// Whether a user is signed in.
pub fn is_authenticated(snapshot: &StateSnapshot) -> bool {
    snapshot.auth.user.is_some()
}

/// Role of the signed-in user.
pub fn user_role(snapshot: &StateSnapshot) -> Option<UserRole> {
    snapshot.auth.user.as_ref().map(|u| u.role)
}

/// Whether the signed-in user is an administrator.
pub fn is_admin(snapshot: &StateSnapshot) -> bool {
    user_role(snapshot) == Some(UserRole::Admin)
}

pub fn status(snapshot: &StateSnapshot) -> RequestStatus {
    snapshot.auth.status
}

pub fn message(snapshot: &StateSnapshot) -> Option<String> {
    snapshot.auth.message.clone()
}
