//! Linterp CLI - Command-line interface for breakpoint table interpolation.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate a table at a few points
//! linterp eval --domain 0,1 --range 2,4 --left clamp -- -5 0.5 10
//!
//! # Sweep a table loaded from a TOML file
//! linterp sweep --table gain.toml --from 100 --to -100
//!
//! # Inspect a table
//! linterp show --table gain.toml --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Eval(args) => commands::eval::execute(args, format)?,
        Commands::Sweep(args) => commands::sweep::execute(args, format)?,
        Commands::Show(args) => commands::show::execute(args, format)?,
    }

    Ok(())
}

/// Installs a stderr subscriber; `log` records from the library are bridged.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
