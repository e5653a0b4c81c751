//! Payment subdomain: booking payments and revenue statistics.

use common::{Money, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::de::{null_as_default, reference};
use crate::read_model::{ReadModel, Record};
use crate::status::RequestStatus;

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// Returns the status name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Unknown => "unknown",
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => PaymentStatus::Pending,
            "completed" => PaymentStatus::Completed,
            "failed" => PaymentStatus::Failed,
            "refunded" => PaymentStatus::Refunded,
            "cancelled" => PaymentStatus::Cancelled,
            _ => PaymentStatus::Unknown,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment made for a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: Money,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PaymentStatus,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default, alias = "booking", deserialize_with = "reference")]
    pub booking_id: Option<RecordId>,
    #[serde(default, alias = "customer", deserialize_with = "reference")]
    pub customer_id: Option<RecordId>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Payment {
    /// Creates a payment with no booking linkage.
    pub fn new(id: impl Into<RecordId>, amount: Money, status: PaymentStatus) -> Self {
        Self {
            id: id.into(),
            amount,
            status,
            method: None,
            booking_id: None,
            customer_id: None,
            created_at: None,
        }
    }

    /// Links the payment to a booking.
    pub fn for_booking(mut self, booking_id: impl Into<RecordId>) -> Self {
        self.booking_id = Some(booking_id.into());
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, at: impl Into<Timestamp>) -> Self {
        self.created_at = Some(at.into());
        self
    }
}

impl Record for Payment {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }
}

/// Precomputed payment totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_revenue: Money,
    #[serde(deserialize_with = "null_as_default")]
    pub completed: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pending: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub failed: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub refunded_amount: Money,
}

/// State of the payment subdomain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentState {
    #[serde(deserialize_with = "null_as_default")]
    pub payments: Vec<Payment>,
    pub current_payment: Option<Payment>,
    pub payment_stats: Option<PaymentStats>,
    #[serde(flatten)]
    pub status: RequestStatus,
    #[serde(alias = "errorMessage")]
    pub message: Option<String>,
}

impl ReadModel for PaymentState {
    fn name(&self) -> &'static str {
        "payment"
    }

    fn count(&self) -> usize {
        self.payments.len()
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
