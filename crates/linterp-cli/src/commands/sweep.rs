//! Sweep command implementation.
//!
//! Evaluates a table at evenly spaced queries between two bounds.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::{evaluate, TableArgs};
use crate::error::{CliError, CliResult};
use crate::output::print_output;

/// Upper bound on the number of queries in one sweep.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Arguments for the sweep command.
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// First query point
    #[arg(long, allow_negative_numbers = true)]
    pub from: f32,

    /// Last query point (inclusive if reached by whole steps)
    #[arg(long, allow_negative_numbers = true)]
    pub to: f32,

    /// Distance between queries
    #[arg(short, long, default_value = "1")]
    pub step: f32,
}

/// Execute the sweep command.
pub fn execute(args: SweepArgs, format: OutputFormat) -> Result<()> {
    let table = args.table.load()?;
    let queries = sweep_points(args.from, args.to, args.step)?;
    debug!(count = queries.len(), "sweeping table");

    let points = evaluate(&table, &queries);
    print_output(&points, format)
}

/// Queries from `from` towards `to` in increments of `step`.
///
/// Runs downwards when `from > to`. Each point is computed from its index, so
/// rounding does not accumulate along the sweep.
pub fn sweep_points(from: f32, to: f32, step: f32) -> CliResult<Vec<f32>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(CliError::InvalidStep(step));
    }

    let intervals = ((to - from).abs() / step).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f32 {
        return Err(CliError::SweepTooLarge {
            max: MAX_SWEEP_POINTS,
        });
    }

    let direction = if to >= from { 1.0 } else { -1.0 };
    let count = intervals as usize + 1;
    Ok((0..count)
        .map(|i| from + direction * step * i as f32)
        .collect())
}
