//! CLI command implementations.

pub mod eval;
pub mod show;
pub mod sweep;

// Re-export submodules for convenience
pub use eval::EvalArgs;
pub use show::ShowArgs;
pub use sweep::SweepArgs;

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};

use linterp_math::extrapolation::{ExtrapolationMode, ExtrapolationPolicy};
use linterp_math::interpolation::{BreakpointTable, Interpolator};

use crate::error::{CliError, CliResult};
use crate::output::MinimalRow;

/// Where a command reads its breakpoint table from.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// TOML table file with `domain`, `range` and an optional `[policy]`
    #[arg(short, long, conflicts_with_all = ["domain", "range"])]
    pub table: Option<PathBuf>,

    /// Domain breakpoints (comma-separated, e.g., "0,1,2")
    #[arg(short, long, requires = "range", allow_hyphen_values = true)]
    pub domain: Option<String>,

    /// Outputs at each breakpoint (comma-separated, e.g., "0,1,0")
    #[arg(short, long, requires = "domain", allow_hyphen_values = true)]
    pub range: Option<String>,

    /// Extrapolation mode for both sides
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeChoice>,

    /// Extrapolation mode left of the table (overrides --mode)
    #[arg(long, value_enum)]
    pub left: Option<ModeChoice>,

    /// Extrapolation mode right of the table (overrides --mode)
    #[arg(long, value_enum)]
    pub right: Option<ModeChoice>,
}

impl TableArgs {
    /// Loads the table and applies any policy overrides.
    pub fn load(&self) -> CliResult<BreakpointTable> {
        let table = match (&self.table, &self.domain, &self.range) {
            (Some(path), _, _) => load_table_file(path)?,
            (None, Some(domain), Some(range)) => BreakpointTable::new(
                parse_list("domain", domain)?,
                parse_list("range", range)?,
            )?,
            _ => return Err(CliError::MissingTable),
        };

        let policy = self.resolve_policy(table.policy());
        debug!(points = table.len(), %policy, "table ready");
        Ok(table.with_policy(policy))
    }

    /// Layers `--mode`, then `--left`/`--right`, over `base`.
    pub fn resolve_policy(&self, base: ExtrapolationPolicy) -> ExtrapolationPolicy {
        let mut policy = match self.mode {
            Some(mode) => ExtrapolationPolicy::symmetric(mode.into()),
            None => base,
        };
        if let Some(left) = self.left {
            policy = policy.with_left(left.into());
        }
        if let Some(right) = self.right {
            policy = policy.with_right(right.into());
        }
        policy
    }
}

/// Extrapolation mode choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeChoice {
    /// Return the query itself
    Identity,
    /// Hold the nearest boundary output
    Clamp,
    /// Continue the boundary segment's slope
    Extend,
}

impl From<ModeChoice> for ExtrapolationMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Identity => ExtrapolationMode::Identity,
            ModeChoice::Clamp => ExtrapolationMode::Clamp,
            ModeChoice::Extend => ExtrapolationMode::Extend,
        }
    }
}

/// One evaluated query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Tabled)]
pub struct EvalPoint {
    #[tabled(rename = "x")]
    pub x: f32,
    #[tabled(rename = "y")]
    pub y: f32,
}

impl MinimalRow for EvalPoint {
    fn minimal(&self) -> String {
        self.y.to_string()
    }
}

/// Evaluates `table` at every query.
pub fn evaluate(table: &BreakpointTable, queries: &[f32]) -> Vec<EvalPoint> {
    queries
        .iter()
        .map(|&x| EvalPoint {
            x,
            y: table.interpolate(x),
        })
        .collect()
}

/// Reads a TOML table file.
pub fn load_table_file(path: &Path) -> CliResult<BreakpointTable> {
    info!(path = %path.display(), "loading table file");
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| CliError::TableFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a comma-separated list of numbers.
pub fn parse_list(field: &'static str, s: &str) -> CliResult<Vec<f32>> {
    s.split(',')
        .map(|item| {
            item.trim()
                .parse::<f32>()
                .map_err(|_| CliError::InvalidNumber {
                    field,
                    value: item.trim().to_string(),
                })
        })
        .collect()
}
