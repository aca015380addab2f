//! `folio`: browse a book catalog from the command line.
//!
//! Every page-producing command renders the complete browser document, as it
//! would stand after the requested interactions, to stdout or `--output`.

mod cli;
mod commands;
mod error;

use crate::cli::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match commands::run(&cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(retryable = err.is_retryable(), "{err}");
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        },
    }
}

/// Logs go to stderr so rendered pages can be piped from stdout. `RUST_LOG`
/// takes precedence over `-v`.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
