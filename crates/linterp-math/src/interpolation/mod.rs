//! Piecewise-linear interpolation over breakpoint tables.
//!
//! A table is two index-aligned sequences: the `domain` breakpoints (assumed
//! non-decreasing) and the `range` outputs. A query is answered in two steps:
//!
//! 1. **Selection**: pick the [`Segment`] of two adjacent breakpoints that
//!    brackets the query, or the nearest end segment.
//! 2. **Evaluation**: interpolate on the segment's line. If the result passes
//!    one of the segment's outputs, the policy for that side decides the answer
//!    (see [`crate::extrapolation`]).
//!
//! # Entry Points
//!
//! - [`interpolate`]: one-shot query over borrowed `f32` slices
//! - [`interpolate_extended`]: same, with the default extend-both-sides policy
//! - [`interpolate_ints`]: one-shot query over integer tables
//! - [`BreakpointTable`]: owned, validated table for repeated queries
//!
//! | Entry point | Validation | Segment search |
//! |-------------|------------|----------------|
//! | Free functions | Every call | Linear scan |
//! | `BreakpointTable` | Once | Binary search |

mod linear;
mod segment;
mod table;

pub use linear::{interpolate, interpolate_extended, interpolate_ints};
pub use segment::{Orientation, Segment};
pub use table::BreakpointTable;

/// Trait for tables that answer queries without failing.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated or extrapolated value at x.
    fn interpolate(&self, x: f32) -> f32;

    /// Returns the first breakpoint position.
    fn min_x(&self) -> f32;

    /// Returns the last breakpoint position.
    fn max_x(&self) -> f32;

    /// Checks if x is within the breakpoint span.
    fn in_range(&self, x: f32) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extrapolation::{ExtrapolationMode, ExtrapolationPolicy};
    use approx::assert_relative_eq;

    const MODES: [ExtrapolationMode; 3] = [
        ExtrapolationMode::Identity,
        ExtrapolationMode::Clamp,
        ExtrapolationMode::Extend,
    ];

    #[test]
    fn test_through_breakpoints() {
        let domain = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let range = vec![2.0, 2.5, 3.0, 2.5, 4.0];

        for left in MODES {
            for right in MODES {
                let policy = ExtrapolationPolicy::new(left, right);
                let table = BreakpointTable::new(domain.clone(), range.clone())
                    .unwrap()
                    .with_policy(policy);

                for (x, y) in domain.iter().zip(range.iter()) {
                    assert_relative_eq!(interpolate(*x, &domain, &range, policy).unwrap(), *y);
                    assert_relative_eq!(table.interpolate(*x), *y);
                }
            }
        }
    }

    #[test]
    fn test_free_function_and_table_agree() {
        let domain = vec![-4.0, -1.0, 0.0, 0.0, 2.0, 8.0];
        let range = vec![1.0, 3.0, 3.0, -2.0, 6.0, 0.0];
        let policy = ExtrapolationPolicy::new(ExtrapolationMode::Identity, ExtrapolationMode::Clamp);
        let table = BreakpointTable::new(domain.clone(), range.clone())
            .unwrap()
            .with_policy(policy);

        let mut x = -10.0_f32;
        while x <= 12.0 {
            assert_eq!(
                interpolate(x, &domain, &range, policy).unwrap(),
                table.interpolate(x),
                "x = {}",
                x
            );
            x += 0.25;
        }
    }

    #[test]
    fn test_extend_continues_slope() {
        let domain = [0.0, 1.0, 3.0];
        let range = [1.0, 2.0, 6.0];
        let slope = (range[2] - range[1]) / (domain[2] - domain[1]);

        for d in [0.5_f32, 1.0, 4.0] {
            let y = interpolate_extended(domain[2] + d, &domain, &range).unwrap();
            assert_relative_eq!(y, range[2] + d * slope, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_table_usable_as_trait_object() {
        let table = BreakpointTable::new(vec![0.0, 10.0], vec![0.0, 100.0]).unwrap();
        let interp: &dyn Interpolator = &table;

        assert_relative_eq!(interp.interpolate(2.5), 25.0);
        assert!(interp.in_range(10.0));
    }
}
