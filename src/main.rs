//! recsize-bench CLI entry point
//!
//! Silent on success. Any failure prints one diagnostic line to stderr and
//! exits with status 1.

use anyhow::Result;
use clap::error::ErrorKind;
use recsize_bench::config::cli::Cli;
use recsize_bench::{run_workload, RunConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders the usage text along with the error
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if cli.debug {
        init_logging();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Build configuration, validate, and execute the workload
fn run(cli: &Cli) -> Result<()> {
    let config = RunConfig::try_from(cli)?;
    log::debug!("config: {:?}", config);

    let summary = run_workload(&config)?;
    log::debug!(
        "done: {} reads, {} bytes requested",
        summary.reads_issued,
        summary.bytes_requested
    );

    Ok(())
}

/// Debug logging to stderr, configured from `--debug` only
fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}
