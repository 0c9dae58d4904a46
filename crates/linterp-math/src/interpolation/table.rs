//! Owned, validated breakpoint tables.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::extrapolation::ExtrapolationPolicy;
use crate::interpolation::linear::{validate_table, widen};
use crate::interpolation::{Interpolator, Segment};

/// A breakpoint table with its extrapolation policy.
///
/// The table is validated once at construction, so lookups cannot fail.
/// Segments are found by binary search, which selects the same segment as
/// [`interpolate`](crate::interpolation::interpolate) as long as the domain is
/// non-decreasing.
///
/// Deserializing re-runs the same validation as [`BreakpointTable::new`].
///
/// # Example
///
/// ```rust
/// use linterp_math::extrapolation::ExtrapolationMode;
/// use linterp_math::interpolation::{BreakpointTable, Interpolator};
///
/// let table = BreakpointTable::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0])
///     .unwrap()
///     .with_policy(ExtrapolationMode::Clamp);
///
/// assert_eq!(table.interpolate(1.5), 0.5);
/// assert_eq!(table.interpolate(3.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct BreakpointTable {
    domain: Vec<f32>,
    range: Vec<f32>,
    policy: ExtrapolationPolicy,
}

/// Unvalidated wire form of [`BreakpointTable`].
#[derive(Deserialize)]
struct RawTable {
    domain: Vec<f32>,
    range: Vec<f32>,
    #[serde(default)]
    policy: ExtrapolationPolicy,
}

impl TryFrom<RawTable> for BreakpointTable {
    type Error = MathError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.domain, raw.range)?.with_policy(raw.policy))
    }
}

impl BreakpointTable {
    /// Creates a table using the default policy.
    ///
    /// # Arguments
    ///
    /// * `domain` - Breakpoint positions (assumed non-decreasing)
    /// * `range` - Outputs at each breakpoint
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points or if lengths differ.
    pub fn new(domain: Vec<f32>, range: Vec<f32>) -> MathResult<Self> {
        validate_table(domain.len(), range.len())?;

        log::debug!(
            "breakpoint table with {} points over [{}, {}]",
            domain.len(),
            domain[0],
            domain[domain.len() - 1]
        );

        Ok(Self {
            domain,
            range,
            policy: ExtrapolationPolicy::default(),
        })
    }

    /// Creates a table from integer breakpoints, widened to `f32`.
    ///
    /// # Errors
    ///
    /// Same as [`BreakpointTable::new`].
    pub fn from_ints(domain: &[i32], range: &[i32]) -> MathResult<Self> {
        Self::new(widen(domain), widen(range))
    }

    /// Replaces the extrapolation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl Into<ExtrapolationPolicy>) -> Self {
        self.policy = policy.into();
        self
    }

    /// Returns the extrapolation policy.
    pub fn policy(&self) -> ExtrapolationPolicy {
        self.policy
    }

    /// Returns the breakpoint positions.
    pub fn domain(&self) -> &[f32] {
        &self.domain
    }

    /// Returns the outputs at each breakpoint.
    pub fn range(&self) -> &[f32] {
        &self.range
    }

    /// Returns the number of breakpoints.
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Always false: a valid table holds at least two breakpoints.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Iterates over `(domain, range)` pairs.
    pub fn breakpoints(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.domain.iter().copied().zip(self.range.iter().copied())
    }

    /// Returns the segment used to answer a query at `x`.
    pub fn segment_at(&self, x: f32) -> Segment {
        Segment::select_sorted(x, &self.domain, &self.range)
    }
}

impl Interpolator for BreakpointTable {
    fn interpolate(&self, x: f32) -> f32 {
        self.segment_at(x).evaluate(x, &self.policy)
    }

    fn min_x(&self) -> f32 {
        self.domain[0]
    }

    fn max_x(&self) -> f32 {
        self.domain[self.domain.len() - 1]
    }
}
