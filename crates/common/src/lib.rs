//! Shared value types used by every subdomain of the state snapshot.

pub mod id;
pub mod money;
pub mod timestamp;

pub use id::RecordId;
pub use money::Money;
pub use timestamp::Timestamp;
