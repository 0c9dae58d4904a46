//! Eval command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::{evaluate, TableArgs};
use crate::output::print_output;

/// Arguments for the eval command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Query points
    #[arg(required = true, allow_negative_numbers = true)]
    pub queries: Vec<f32>,
}

/// Execute the eval command.
pub fn execute(args: EvalArgs, format: OutputFormat) -> Result<()> {
    let table = args.table.load()?;
    let points = evaluate(&table, &args.queries);
    print_output(&points, format)
}
