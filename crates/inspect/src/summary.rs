//! One-shot dashboard overview of a snapshot.

use common::Money;
use domain::{RequestStatus, RoleCount, StateSnapshot, Subdomain};
use selectors::{Query, contact, lifecycle, notification, payment, services, users};
use serde::Serialize;

/// Lifecycle of one subdomain as shown in the overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubdomainSummary {
    pub subdomain: Subdomain,
    pub records: usize,
    #[serde(flatten)]
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Headline figures of a snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub authenticated: bool,
    pub total_users: usize,
    pub active_users: usize,
    pub roles: Vec<RoleCount>,
    pub total_messages: usize,
    pub unread_messages: usize,
    pub unread_notifications: usize,
    pub pending_payments: usize,
    pub revenue: Money,
    pub active_services: usize,
    pub categories: Vec<String>,
    pub subdomains: Vec<SubdomainSummary>,
}

impl Summary {
    pub fn of(snapshot: &StateSnapshot) -> Self {
        let subdomains = lifecycle::all_statuses(snapshot)
            .into_iter()
            .map(|(subdomain, status)| SubdomainSummary {
                subdomain,
                records: lifecycle::record_count(subdomain).apply(snapshot),
                status,
                message: lifecycle::message(subdomain).apply(snapshot),
            })
            .collect();

        Self {
            authenticated: selectors::auth::is_authenticated(snapshot),
            total_users: users::total_users(snapshot),
            active_users: users::active_users(snapshot).len(),
            roles: users::role_breakdown(snapshot),
            total_messages: contact::total_messages(snapshot),
            unread_messages: contact::unread_count(snapshot),
            unread_notifications: notification::unread_count(snapshot),
            pending_payments: payment::pending_count(snapshot),
            revenue: payment::total_revenue(snapshot),
            active_services: services::active_count(snapshot),
            categories: services::categories(snapshot),
            subdomains,
        }
    }

    /// Subdomains whose last request failed.
    pub fn failing(&self) -> impl Iterator<Item = &SubdomainSummary> {
        self.subdomains.iter().filter(|s| s.status.is_error)
    }
}
