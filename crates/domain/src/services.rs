//! Services subdomain: the cleaning services offered and their performance.

use common::{Money, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::de::{default_true, null_as_default, null_as_true};
use crate::read_model::{ReadModel, Record};
use crate::status::RequestStatus;

/// A cleaning service offered to customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Money,
    /// Duration in minutes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: u32,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_active: bool,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Service {
    /// Creates an active, available service.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: category.into(),
            price,
            duration,
            is_active: true,
            is_available: true,
            created_at: None,
        }
    }

    /// Sets the active flag.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the availability flag.
    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}

impl Record for Service {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }
}

/// Precomputed booking performance of one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePerformance {
    #[serde(alias = "_id")]
    pub service_id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_bookings: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_revenue: Money,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

impl ServicePerformance {
    /// Creates a performance entry with no revenue recorded.
    pub fn new(service_id: impl Into<RecordId>, name: impl Into<String>, completed: u64) -> Self {
        Self {
            service_id: service_id.into(),
            name: name.into(),
            completed_bookings: completed,
            total_revenue: Money::zero(),
            average_rating: None,
        }
    }
}

/// Precomputed service catalogue statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub active: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub top_services: Vec<ServicePerformance>,
}

/// State of the services subdomain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesState {
    #[serde(deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    pub current_service: Option<Service>,
    pub service_stats: Option<ServiceStats>,
    #[serde(flatten)]
    pub status: RequestStatus,
    #[serde(alias = "errorMessage")]
    pub message: Option<String>,
}

impl ReadModel for ServicesState {
    fn name(&self) -> &'static str {
        "services"
    }

    fn count(&self) -> usize {
        self.services.len()
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_flags_default_to_true() {
        let s: Service = serde_json::from_str(
            r#"{"_id":"s1","name":"Deep clean","category":"residential","price":120,"duration":180}"#,
        )
        .unwrap();
        assert!(s.is_active);
        assert!(s.is_available);
        assert_eq!(s.price, Money::from_dollars(120));
        assert_eq!(s.duration, 180);
    }

    #[test]
    fn stats_slot_reads_top_services() {
        let stats: ServiceStats = serde_json::from_str(
            r#"{"total":3,"topServices":[{"serviceId":"s1","name":"A","completedBookings":4}]}"#,
        )
        .unwrap();
        assert_eq!(stats.top_services.len(), 1);
        assert_eq!(stats.top_services[0].completed_bookings, 4);
    }
}
