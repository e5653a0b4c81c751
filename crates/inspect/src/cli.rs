//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};

use crate::config::LogFormat;
use crate::registry::QueryArgs;

#[derive(Debug, Parser)]
#[command(
    name = "snapshot-inspect",
    version,
    about = "Evaluate read-model queries against an admin store snapshot",
    long_about = "Loads a JSON snapshot of the admin store and evaluates named queries \
                  against it. Results are printed to stdout as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Snapshot file to read (overrides SNAPSHOT_PATH).
    #[arg(long, short = 's', value_name = "PATH", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Tracing filter directive (overrides RUST_LOG).
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    pub log_level: Option<String>,

    /// Log output format (overrides LOG_FORMAT).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Evaluate time windows as of this RFC 3339 instant instead of the
    /// wall clock.
    #[arg(long, value_name = "RFC3339", global = true)]
    pub now: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Evaluate one named query.
    Query {
        /// Query name, e.g. `payment.by_status`.
        name: String,

        #[command(flatten)]
        args: QueryArgs,
    },

    /// List the registered queries.
    List,

    /// Print an overview of every subdomain.
    Summary,
}
