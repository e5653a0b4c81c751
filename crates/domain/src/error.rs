//! Domain error types.

use thiserror::Error;

/// Errors that can occur while loading a state snapshot.
///
/// Queries over a decoded snapshot never fail; only getting a snapshot into
/// memory can.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The snapshot source could not be read.
    #[error("Snapshot read error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot was not valid JSON or a field had the wrong type.
    #[error("Snapshot deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// A subdomain name did not match any known subdomain.
    #[error("Unknown subdomain: {0}")]
    UnknownSubdomain(String),
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
