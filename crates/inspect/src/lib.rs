//! Command-line inspector for admin store snapshots.
//!
//! Loads a [`StateSnapshot`] from disk and evaluates the read-model queries
//! of the `selectors` crate against it, with structured logging (tracing)
//! on stderr and JSON results on stdout.

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod summary;
pub mod telemetry;

use domain::StateSnapshot;
use selectors::{Clock, FixedClock, SystemClock};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::registry::QUERIES;
use crate::summary::Summary;

/// Evaluates a command against an already loaded snapshot.
pub fn execute(command: &Command, snapshot: &StateSnapshot, clock: &dyn Clock) -> Result<Value> {
    match command {
        Command::Query { name, args } => registry::evaluate(name, args, snapshot, clock),
        Command::List => Ok(serde_json::to_value(QUERIES)?),
        Command::Summary => {
            let summary = Summary::of(snapshot);
            for failing in summary.failing() {
                tracing::warn!(
                    subdomain = %failing.subdomain,
                    error = failing.message.as_deref().unwrap_or(""),
                    "subdomain reports a failed request"
                );
            }
            Ok(serde_json::to_value(summary)?)
        }
    }
}

/// Loads the configured snapshot and evaluates the parsed command.
pub fn run(cli: &Cli, config: &Config) -> Result<Value> {
    if matches!(cli.command, Command::List) {
        return execute(&cli.command, &StateSnapshot::new(), &SystemClock);
    }

    let snapshot = StateSnapshot::from_path(&config.snapshot_path)?;
    tracing::info!(path = %config.snapshot_path.display(), "snapshot loaded");

    match cli.now {
        Some(now) => {
            tracing::debug!(%now, "using fixed clock");
            execute(&cli.command, &snapshot, &FixedClock::new(now))
        }
        None => execute(&cli.command, &snapshot, &SystemClock),
    }
}
