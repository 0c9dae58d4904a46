//! Show command implementation.
//!
//! Displays a table's breakpoints and extrapolation policy.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use linterp_math::interpolation::{BreakpointTable, Interpolator};

use crate::cli::OutputFormat;
use crate::commands::TableArgs;
use crate::output::{print_header, print_output, KeyValue, MinimalRow};

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub table: TableArgs,
}

/// One breakpoint row.
#[derive(Debug, Clone, Copy, Serialize, Tabled)]
struct BreakpointRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Domain")]
    domain: f32,
    #[tabled(rename = "Range")]
    range: f32,
}

impl MinimalRow for BreakpointRow {
    fn minimal(&self) -> String {
        format!("{} {}", self.domain, self.range)
    }
}

/// Execute the show command.
pub fn execute(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let table = args.table.load()?;

    match format {
        OutputFormat::Table => {
            print_header("Breakpoint Table");
            print_output(&summary(&table), format)?;
            println!();
            print_output(&rows(&table), format)?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        OutputFormat::Csv | OutputFormat::Minimal => {
            print_output(&rows(&table), format)?;
        }
    }

    Ok(())
}

fn summary(table: &BreakpointTable) -> Vec<KeyValue> {
    let policy = table.policy();
    vec![
        KeyValue::new("Points", table.len().to_string()),
        KeyValue::new("Domain", format!("[{}, {}]", table.min_x(), table.max_x())),
        KeyValue::new("Left", policy.left.to_string()),
        KeyValue::new("Right", policy.right.to_string()),
    ]
}

fn rows(table: &BreakpointTable) -> Vec<BreakpointRow> {
    table
        .breakpoints()
        .enumerate()
        .map(|(index, (domain, range))| BreakpointRow {
            index,
            domain,
            range,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linterp_math::extrapolation::ExtrapolationMode;

    #[test]
    fn test_summary() {
        let table = BreakpointTable::new(vec![1.0, 2.0, 5.0], vec![0.0, 1.0, 0.0])
            .unwrap()
            .with_policy(ExtrapolationMode::Clamp);

        let summary = summary(&table);
        assert_eq!(summary[0].value, "3");
        assert_eq!(summary[1].value, "[1, 5]");
        assert_eq!(summary[2].value, "clamp");
        assert_eq!(summary[3].value, "clamp");
    }

    #[test]
    fn test_rows() {
        let table = BreakpointTable::new(vec![0.0, 0.5], vec![2.0, 4.0]).unwrap();
        let rows = rows(&table);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].minimal(), "0.5 4");
    }
}
