//! Traits shared by records and subdomain state.

use common::{RecordId, Timestamp};

use crate::status::RequestStatus;

/// A uniquely identified entity held in a subdomain's record sequence.
pub trait Record {
    /// Returns the record identifier.
    fn id(&self) -> &RecordId;

    /// Returns the creation timestamp, if the record has one.
    fn created_at(&self) -> Option<&Timestamp>;
}

/// Read access to one subdomain's slice of the snapshot.
///
/// Each subdomain state is a read model populated by the store; this trait
/// exposes what every one of them has in common.
pub trait ReadModel: Send + Sync {
    /// Returns the name of this read model.
    fn name(&self) -> &'static str;

    /// Returns the number of records held.
    fn count(&self) -> usize;

    /// Returns the request lifecycle flags.
    fn status(&self) -> RequestStatus;

    /// Returns the last status or error message.
    fn message(&self) -> Option<&str>;
}
