//! Domain layer for the cleaning-services admin store.
//!
//! This crate describes the read shape of the client-side store:
//! - Record types per subdomain (contact messages, notifications, payments,
//!   services, users) implementing [`Record`]
//! - Subdomain states with lifecycle flags, implementing [`ReadModel`]
//! - [`StateSnapshot`], the aggregate the query facade reads from

pub mod auth;
pub mod contact;
mod de;
pub mod error;
pub mod notification;
pub mod payment;
pub mod priority;
pub mod read_model;
pub mod services;
pub mod snapshot;
pub mod status;
pub mod users;

pub use auth::AuthState;
pub use contact::{ContactMessage, ContactState, ContactStats, ContactStatus};
pub use error::{DomainError, Result};
pub use notification::{Notification, NotificationKind, NotificationState};
pub use payment::{Payment, PaymentState, PaymentStats, PaymentStatus};
pub use priority::Priority;
pub use read_model::{ReadModel, Record};
pub use services::{Service, ServicePerformance, ServiceStats, ServicesState};
pub use snapshot::StateSnapshot;
pub use status::{RequestStatus, Subdomain};
pub use users::{RoleCount, StaffPerformance, User, UserRole, UserStats, UsersState};
