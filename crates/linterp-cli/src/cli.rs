//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{EvalArgs, ShowArgs, SweepArgs};

/// Linterp - Piecewise-linear table interpolation CLI
#[derive(Parser)]
#[command(name = "linterp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a table at one or more query points
    Eval(EvalArgs),

    /// Evaluate a table over an evenly stepped range of queries
    Sweep(SweepArgs),

    /// Display a table's breakpoints and policy
    Show(ShowArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
