//! Inspector error types.

use thiserror::Error;

/// Errors that can occur while running the inspector.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The snapshot could not be loaded.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] domain::DomainError),

    /// No query is registered under this name.
    #[error("Unknown query: {0} (run `snapshot-inspect list` for the catalogue)")]
    UnknownQuery(String),

    /// The query needs an argument that was not given.
    #[error("Query {query} requires --{argument}")]
    MissingArgument {
        query: &'static str,
        argument: &'static str,
    },

    /// An argument could not be parsed.
    #[error("Invalid value for --{argument}: {value}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },

    /// The result could not be rendered as JSON.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// The log subscriber could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// Result type for inspector operations.
pub type Result<T> = std::result::Result<T, InspectError>;
