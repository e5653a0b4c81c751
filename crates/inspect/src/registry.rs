//! Named queries the inspector can evaluate.

use clap::Args;
use common::Money;
use domain::{
    ContactStatus, NotificationKind, PaymentStatus, Priority, StateSnapshot, Subdomain, UserRole,
};
use selectors::{Clock, Query, auth, contact, lifecycle, notification, payment, services, users};
use serde::Serialize;
use serde_json::Value;

use crate::error::{InspectError, Result};

/// Arguments a query may bind.
#[derive(Debug, Clone, Default, Args)]
pub struct QueryArgs {
    /// Record identifier for lookups.
    #[arg(long)]
    pub id: Option<String>,
    /// Status to filter by (contact or payment status).
    #[arg(long)]
    pub status: Option<String>,
    /// Priority to filter by.
    #[arg(long)]
    pub priority: Option<String>,
    /// Notification type to filter by.
    #[arg(long)]
    pub kind: Option<String>,
    /// User role to filter or count by.
    #[arg(long)]
    pub role: Option<String>,
    /// Service category to filter by.
    #[arg(long)]
    pub category: Option<String>,
    /// Booking identifier payments are linked to.
    #[arg(long)]
    pub booking: Option<String>,
    /// Lower bound of a price (currency units) or duration (minutes) range.
    #[arg(long)]
    pub min: Option<String>,
    /// Upper bound of a price (currency units) or duration (minutes) range.
    #[arg(long)]
    pub max: Option<String>,
    /// Number of entries in a ranking. Negative values count as zero.
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

/// Catalogue entry of a registered query.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QueryInfo {
    pub name: &'static str,
    pub description: &'static str,
}

const fn info(name: &'static str, description: &'static str) -> QueryInfo {
    QueryInfo { name, description }
}

/// Every registered query. `<subdomain>.status` and `<subdomain>.message`
/// work for all six subdomains.
pub const QUERIES: &[QueryInfo] = &[
    info("<subdomain>.status", "Lifecycle flags of any subdomain"),
    info("<subdomain>.message", "Status or error message of any subdomain"),
    info("auth.user", "Signed-in user"),
    info("auth.is_authenticated", "Whether a user is signed in"),
    info("auth.role", "Role of the signed-in user"),
    info("auth.is_admin", "Whether the signed-in user is an admin"),
    info("contact.messages", "All contact messages"),
    info("contact.current", "Message open in the admin view"),
    info("contact.stats", "Precomputed inbox statistics"),
    info("contact.by_status", "Messages with --status"),
    info("contact.by_priority", "Messages with --priority"),
    info("contact.by_id", "Message with --id"),
    info("contact.unread", "Unread messages"),
    info("contact.unread_count", "Number of unread messages"),
    info("contact.total", "Number of messages"),
    info("contact.recent", "Messages from the last 30 days"),
    info("notification.all", "All notifications"),
    info("notification.unread", "Unread notifications"),
    info("notification.unread_count", "Number of unread notifications"),
    info("notification.by_kind", "Notifications with --kind"),
    info("notification.by_priority", "Notifications with --priority"),
    info("notification.by_id", "Notification with --id"),
    info("notification.recent", "Notifications from the last 7 days"),
    info("payment.all", "All payments"),
    info("payment.current", "Payment open in the admin view"),
    info("payment.stats", "Precomputed payment totals"),
    info("payment.by_status", "Payments with --status"),
    info("payment.completed", "Completed payments"),
    info("payment.pending", "Pending payments"),
    info("payment.pending_count", "Number of pending payments"),
    info("payment.by_id", "Payment with --id"),
    info("payment.for_booking", "Payments linked to --booking"),
    info("payment.total_revenue", "Sum of completed payments"),
    info("payment.reported_revenue", "Revenue from the stats slot, else computed"),
    info("payment.today", "Payments since local midnight"),
    info("payment.today_revenue", "Completed revenue since local midnight"),
    info("services.all", "All services"),
    info("services.current", "Service open in the admin view"),
    info("services.stats", "Precomputed service statistics"),
    info("services.active", "Active services"),
    info("services.available", "Bookable services"),
    info("services.active_count", "Number of active services"),
    info("services.by_category", "Services in --category"),
    info("services.by_price", "Services priced within --min..=--max"),
    info("services.by_duration", "Services lasting --min..=--max minutes"),
    info("services.by_id", "Service with --id"),
    info("services.categories", "Distinct service categories"),
    info("services.top", "Top services by completed bookings (--limit, default 5)"),
    info("users.all", "All users"),
    info("users.current", "User open in the admin view"),
    info("users.stats", "Precomputed user statistics"),
    info("users.by_role", "Users with --role"),
    info("users.active", "Active users"),
    info("users.by_id", "User with --id"),
    info("users.count_by_role", "Number of users with --role"),
    info("users.total", "Number of users"),
    info("users.cleaners", "Users with the cleaner role"),
    info("users.roles", "Accounts per role"),
    info("users.top_cleaners", "Top cleaners by completed bookings (--limit, default 5)"),
];

fn json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn require<'a>(
    query: &'static str,
    argument: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or(InspectError::MissingArgument { query, argument })
}

fn parse_money(argument: &'static str, raw: &str) -> Result<Money> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Money::from_units)
        .ok_or_else(|| InspectError::InvalidArgument {
            argument,
            value: raw.to_string(),
        })
}

fn parse_minutes(argument: &'static str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| InspectError::InvalidArgument {
            argument,
            value: raw.to_string(),
        })
}

fn limit(args: &QueryArgs) -> Option<usize> {
    args.limit.map(|n| usize::try_from(n).unwrap_or(0))
}

/// Evaluates the query registered under `name`.
///
/// Time-windowed queries read the current instant from `clock`.
pub fn evaluate(
    name: &str,
    args: &QueryArgs,
    snapshot: &StateSnapshot,
    clock: &dyn Clock,
) -> Result<Value> {
    tracing::debug!(query = name, ?args, "evaluating query");

    if let Some((prefix, field)) = name.split_once('.') {
        match (prefix.parse::<Subdomain>(), field) {
            (Ok(subdomain), "status") => {
                return json(lifecycle::status(subdomain).apply(snapshot));
            }
            (Ok(subdomain), "message") => {
                return json(lifecycle::message(subdomain).apply(snapshot));
            }
            _ => {}
        }
    }

    match name {
        "auth.user" => json(auth::user(snapshot)),
        "auth.is_authenticated" => json(auth::is_authenticated(snapshot)),
        "auth.role" => json(auth::user_role(snapshot)),
        "auth.is_admin" => json(auth::is_admin(snapshot)),

        "contact.messages" => json(contact::messages(snapshot)),
        "contact.current" => json(contact::current_message(snapshot)),
        "contact.stats" => json(contact::stats(snapshot)),
        "contact.by_status" => {
            let status = require("contact.by_status", "status", &args.status)?;
            json(contact::messages_by_status(ContactStatus::from(status)).apply(snapshot))
        }
        "contact.by_priority" => {
            let priority = require("contact.by_priority", "priority", &args.priority)?;
            json(contact::messages_by_priority(Priority::from(priority)).apply(snapshot))
        }
        "contact.by_id" => {
            let id = require("contact.by_id", "id", &args.id)?;
            json(contact::message_by_id(id).apply(snapshot))
        }
        "contact.unread" => json(contact::unread_messages(snapshot)),
        "contact.unread_count" => json(contact::unread_count(snapshot)),
        "contact.total" => json(contact::total_messages(snapshot)),
        "contact.recent" => json(contact::recent_messages_with(clock).apply(snapshot)),

        "notification.all" => json(notification::notifications(snapshot)),
        "notification.unread" => json(notification::unread_notifications(snapshot)),
        "notification.unread_count" => json(notification::unread_count(snapshot)),
        "notification.by_kind" => {
            let kind = require("notification.by_kind", "kind", &args.kind)?;
            json(notification::notifications_by_kind(NotificationKind::from(kind)).apply(snapshot))
        }
        "notification.by_priority" => {
            let priority = require("notification.by_priority", "priority", &args.priority)?;
            json(notification::notifications_by_priority(Priority::from(priority)).apply(snapshot))
        }
        "notification.by_id" => {
            let id = require("notification.by_id", "id", &args.id)?;
            json(notification::notification_by_id(id).apply(snapshot))
        }
        "notification.recent" => {
            json(notification::recent_notifications_with(clock).apply(snapshot))
        }

        "payment.all" => json(payment::payments(snapshot)),
        "payment.current" => json(payment::current_payment(snapshot)),
        "payment.stats" => json(payment::payment_stats(snapshot)),
        "payment.by_status" => {
            let status = require("payment.by_status", "status", &args.status)?;
            json(payment::payments_by_status(PaymentStatus::from(status)).apply(snapshot))
        }
        "payment.completed" => json(payment::completed_payments(snapshot)),
        "payment.pending" => json(payment::pending_payments(snapshot)),
        "payment.pending_count" => json(payment::pending_count(snapshot)),
        "payment.by_id" => {
            let id = require("payment.by_id", "id", &args.id)?;
            json(payment::payment_by_id(id).apply(snapshot))
        }
        "payment.for_booking" => {
            let booking = require("payment.for_booking", "booking", &args.booking)?;
            json(payment::payments_for_booking(booking).apply(snapshot))
        }
        "payment.total_revenue" => json(payment::total_revenue(snapshot)),
        "payment.reported_revenue" => json(payment::reported_revenue(snapshot)),
        "payment.today" => json(payment::todays_payments_with(clock).apply(snapshot)),
        "payment.today_revenue" => json(payment::todays_revenue_with(clock).apply(snapshot)),

        "services.all" => json(services::services(snapshot)),
        "services.current" => json(services::current_service(snapshot)),
        "services.stats" => json(services::service_stats(snapshot)),
        "services.active" => json(services::active_services(snapshot)),
        "services.available" => json(services::available_services(snapshot)),
        "services.active_count" => json(services::active_count(snapshot)),
        "services.by_category" => {
            let category = require("services.by_category", "category", &args.category)?;
            json(services::services_by_category(category).apply(snapshot))
        }
        "services.by_price" => {
            let min = parse_money("min", require("services.by_price", "min", &args.min)?)?;
            let max = parse_money("max", require("services.by_price", "max", &args.max)?)?;
            json(services::services_by_price_range(min, max).apply(snapshot))
        }
        "services.by_duration" => {
            let min = parse_minutes("min", require("services.by_duration", "min", &args.min)?)?;
            let max = parse_minutes("max", require("services.by_duration", "max", &args.max)?)?;
            json(services::services_by_duration_range(min, max).apply(snapshot))
        }
        "services.by_id" => {
            let id = require("services.by_id", "id", &args.id)?;
            json(services::service_by_id(id).apply(snapshot))
        }
        "services.categories" => json(services::categories(snapshot)),
        "services.top" => json(services::top_performing_services(limit(args)).apply(snapshot)),

        "users.all" => json(users::users(snapshot)),
        "users.current" => json(users::current_user(snapshot)),
        "users.stats" => json(users::user_stats(snapshot)),
        "users.by_role" => {
            let role = require("users.by_role", "role", &args.role)?;
            json(users::users_by_role(UserRole::from(role)).apply(snapshot))
        }
        "users.active" => json(users::active_users(snapshot)),
        "users.by_id" => {
            let id = require("users.by_id", "id", &args.id)?;
            json(users::user_by_id(id).apply(snapshot))
        }
        "users.count_by_role" => {
            let role = require("users.count_by_role", "role", &args.role)?;
            json(users::count_by_role(UserRole::from(role)).apply(snapshot))
        }
        "users.total" => json(users::total_users(snapshot)),
        "users.cleaners" => json(users::cleaners(snapshot)),
        "users.roles" => json(users::role_breakdown(snapshot)),
        "users.top_cleaners" => json(users::top_cleaners(limit(args)).apply(snapshot)),

        _ => Err(InspectError::UnknownQuery(name.to_string())),
    }
}
