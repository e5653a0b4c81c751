//! Snapshot inspector entry point.

use std::process::ExitCode;

use clap::Parser;
use inspect::cli::Cli;
use inspect::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(
        cli.snapshot.clone(),
        cli.log_level.clone(),
        cli.log_format,
    );

    if let Err(err) = inspect::telemetry::init(&config) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    let output = inspect::run(&cli, &config)
        .and_then(|value| Ok(serde_json::to_string_pretty(&value)?));

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "query failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
